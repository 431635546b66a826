pub const PAGE_STYLES: &str = r#"
:root {
    /* Colors */
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --primary-color: #059669;
    --accent-text: #ffffff;
    --border-color: #cbd5e1;
    --navbar-bg: rgba(255, 255, 255, 0.9);
    --card-bg: #ffffff;
    --snippet-color: rgba(5, 150, 105, 0.12);

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    /* Shadows */
    --shadow: 0 4px 12px rgba(15, 23, 42, 0.12);
}

:root[data-theme="dark"] {
    --bg-primary: #0b1120;
    --bg-secondary: #111827;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --primary-color: #00ff88;
    --accent-text: #0b1120;
    --border-color: #1f2937;
    --navbar-bg: rgba(11, 17, 32, 0.85);
    --card-bg: #111827;
    --snippet-color: rgba(0, 255, 136, 0.08);
    --shadow: 0 4px 16px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
    transition: background 0.3s ease, color 0.3s ease;
}

body.keyboard-nav *:focus {
    outline: 2px solid var(--primary-color);
    outline-offset: 2px;
}

/* Navbar */

.navbar {
    position: sticky;
    top: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 1rem 2rem;
    background: var(--navbar-bg);
    backdrop-filter: blur(8px);
    transition: box-shadow 0.3s ease;
}

.navbar.scrolled {
    box-shadow: var(--shadow);
}

.nav-brand {
    font-weight: 700;
    color: var(--primary-color);
    text-decoration: none;
    margin-right: auto;
}

.nav-menu {
    display: flex;
    gap: 1.5rem;
    list-style: none;
    margin: 0;
    padding: 0;
}

.nav-link {
    color: var(--text-secondary);
    text-decoration: none;
    padding-bottom: 2px;
    border-bottom: 2px solid transparent;
}

.nav-link:hover,
.nav-link.active {
    color: var(--primary-color);
    border-bottom-color: var(--primary-color);
}

.theme-toggle,
.nav-menu-btn {
    width: 36px;
    height: 36px;
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    background: var(--bg-secondary);
    color: var(--text-primary);
    cursor: pointer;
}

.nav-menu-btn {
    display: none;
}

@media (max-width: 768px) {
    .nav-menu {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 1rem 2rem;
        background: var(--navbar-bg);
    }

    .nav-menu.active {
        display: flex;
    }

    .nav-menu-btn {
        display: block;
    }
}

/* Sections */

.page {
    position: relative;
    z-index: 1;
}

.section {
    min-height: 80vh;
    padding: 5rem 2rem;
    max-width: 1100px;
    margin: 0 auto;
}

/* Scroll reveal, toggled by interop::observe_reveal */

.reveal {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.reveal-slide {
    transform: translateX(-20px);
}

.reveal.visible {
    opacity: 1;
    transform: none;
}

.section-title {
    color: var(--primary-color);
}

.hero {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
    flex-wrap: wrap;
}

.hero-actions {
    display: flex;
    gap: 1rem;
}

.hero-visual {
    position: relative;
}

.profile-image {
    width: 240px;
    height: 240px;
    border-radius: 50%;
    object-fit: cover;
}

.floating-card {
    position: absolute;
    padding: 0.5rem;
    border-radius: var(--radius-md);
    background: var(--card-bg);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.floating-card:hover {
    transform: scale(1.1);
    box-shadow: 0 0 30px rgba(0, 255, 136, 0.6);
}

.btn {
    position: relative;
    overflow: hidden;
    padding: 0.75rem 1.5rem;
    border-radius: var(--radius-md);
    border: 1px solid var(--primary-color);
    cursor: pointer;
    font-weight: 600;
}

.btn-primary {
    background: var(--primary-color);
    color: var(--accent-text);
}

.btn-secondary {
    background: transparent;
    color: var(--primary-color);
}

.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.6);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}

.stats,
.achievements,
.contact-links,
.skill-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.stat-card,
.skill-category,
.experience-item {
    padding: 1.25rem;
    border-radius: var(--radius-lg);
    background: var(--card-bg);
    border: 1px solid var(--border-color);
}

.stat-value {
    display: block;
    font-size: 1.75rem;
    font-weight: 700;
    color: var(--primary-color);
}

.achievement-badge {
    padding: 0.5rem 1rem;
    border-radius: 999px;
    border: 1px solid var(--primary-color);
    cursor: pointer;
}

.skills-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1.5rem;
}

.skill-tag {
    display: inline-block;
    padding: 0.35rem 0.75rem;
    border-radius: var(--radius-sm);
    background: var(--bg-primary);
    transition: transform 0.2s ease, opacity 0.2s ease;
}

.timeline {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    border-left: 2px solid var(--primary-color);
    padding-left: 1.5rem;
}

.experience-header {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
}

.experience-company,
.experience-period {
    color: var(--text-secondary);
}

.contact-link {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.25rem;
    border-radius: var(--radius-md);
    background: var(--card-bg);
    color: var(--text-primary);
    text-decoration: none;
    transform: translateY(-5px);
}

.contact-link.pulse {
    animation: pulse 0.5s ease;
}

/* Code background */

.code-background {
    position: fixed;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
    z-index: 0;
}

.code-snippet {
    position: absolute;
    font-family: 'Fira Code', monospace;
    font-size: 0.85rem;
    white-space: nowrap;
    color: var(--snippet-color);
}

/* Certificate modal */

.cert-modal {
    display: none;
    position: fixed;
    inset: 0;
    z-index: 200;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.7);
}

.cert-modal.show {
    display: flex;
}

.cert-modal-content {
    width: min(900px, 92vw);
    max-height: 90vh;
    overflow: auto;
    padding: 1rem;
    border-radius: var(--radius-lg);
    background: var(--bg-secondary);
}

.cert-modal-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.cert-modal-close {
    border: none;
    background: transparent;
    color: var(--text-primary);
    font-size: 1.25rem;
    cursor: pointer;
}

.cert-image,
.cert-frame {
    width: 100%;
    border: none;
}

.cert-frame {
    height: 75vh;
}

.footer {
    position: relative;
    z-index: 1;
    padding: 2rem;
    text-align: center;
    color: var(--text-secondary);
}

@keyframes pulse {
    0%, 100% {
        transform: translateY(-5px);
    }
    50% {
        transform: translateY(0);
    }
}

@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
"#;
