//! Global CSS for the StoryCraft desktop shell.
//!
//! One stylesheet injected at the root. Dark mode is driven by the `.dark`
//! class on the app container, not a media query, so the theme controller
//! stays the single source of truth.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (text) */
  --ink: #1f2433;
  --ink-soft: rgba(31, 36, 51, 0.72);
  --ink-muted: rgba(31, 36, 51, 0.5);

  /* PARCHMENT (surfaces) */
  --surface: #f8f7fc;
  --surface-card: #ffffff;
  --surface-border: #e4e2f0;

  /* VIOLET (brand) */
  --violet: #7c5cff;
  --violet-deep: #5a3fd4;
  --violet-glow: rgba(124, 92, 255, 0.35);

  /* ACCENTS */
  --sky: #4aa8ff;
  --orchid: #b96bff;
  --fern: #3fc98a;
  --ember: #ff9d6b;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
  --font-serif: 'Georgia', 'Times New Roman', serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* Dark overrides, toggled by the app container class */
.app.dark {
  --ink: #eceaf6;
  --ink-soft: rgba(236, 234, 246, 0.75);
  --ink-muted: rgba(236, 234, 246, 0.5);
  --surface: #12101c;
  --surface-card: #1b1828;
  --surface-border: #2b2740;
  --violet-glow: rgba(124, 92, 255, 0.5);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
}

.app {
  background: var(--surface);
  color: var(--ink);
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.page {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.landing-main {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 4rem;
  padding-bottom: 4rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  text-align: center;
  margin-bottom: 2rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid transparent;
  border-radius: 0.5rem;
  padding: 0.55rem 1.1rem;
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast), color var(--transition-fast),
              border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-primary {
  background: var(--violet);
  color: #ffffff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--violet-deep);
  box-shadow: 0 0 18px var(--violet-glow);
}

.btn-outline {
  background: transparent;
  color: var(--violet);
  border-color: var(--violet);
}

.btn-outline:hover:not(:disabled) {
  background: var(--violet);
  color: #ffffff;
}

.btn-ghost {
  background: transparent;
  color: var(--ink-soft);
}

.btn-ghost:hover:not(:disabled) {
  background: var(--surface-border);
  color: var(--ink);
}

.btn-pill,
.btn-pill-outline {
  border-radius: 999px;
  padding: 0.7rem 1.8rem;
  font-size: var(--text-base);
}

.btn-pill {
  background: #ffffff;
  color: var(--violet-deep);
}

.btn-pill:hover:not(:disabled) {
  box-shadow: 0 0 18px rgba(255, 255, 255, 0.45);
}

.btn-pill-outline {
  background: transparent;
  color: #ffffff;
  border-color: rgba(255, 255, 255, 0.8);
}

.btn-pill-outline:hover:not(:disabled) {
  background: rgba(255, 255, 255, 0.15);
}

/* === Cards === */
.card {
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: 0.75rem;
  box-shadow: 0 1px 3px rgba(18, 16, 28, 0.08);
}

.card-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1.25rem 1.25rem 0.5rem;
}

.card-title {
  font-size: var(--text-lg);
  font-weight: 700;
}

.card-content {
  padding: 1rem 1.25rem 1.25rem;
}

/* === Progress === */
.progress-track {
  flex: 1;
  height: 0.5rem;
  border-radius: 999px;
  background: var(--surface-border);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  border-radius: 999px;
  background: linear-gradient(90deg, var(--violet), var(--orchid));
  transition: width var(--transition-normal);
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 20;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.9rem 2rem;
  background: var(--surface-card);
  border-bottom: 1px solid var(--surface-border);
}

.brand {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--violet);
  text-decoration: none;
}

.header-links {
  display: flex;
  align-items: center;
  gap: 0.25rem;
}

.header-link {
  background: none;
  border: none;
  padding: 0.5rem 0.9rem;
  border-radius: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink-soft);
}

.header-link:hover {
  color: var(--violet);
  background: var(--surface-border);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.session-chip {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  padding: 0.35rem 0.8rem;
  border: 1px solid var(--surface-border);
  border-radius: 999px;
}

.sign-in-btn {
  background: var(--violet);
  color: #ffffff;
  border: none;
  border-radius: 0.5rem;
  padding: 0.5rem 1.1rem;
  font-size: var(--text-sm);
  font-weight: 600;
}

.sign-in-btn:hover {
  background: var(--violet-deep);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.4rem;
  height: 2.4rem;
  background: none;
  border: 1px solid var(--surface-border);
  border-radius: 0.5rem;
  color: var(--ink-soft);
}

.icon-btn:hover {
  color: var(--violet);
  border-color: var(--violet);
}

/* === Dock (compact navigation) === */
.dock-wrap {
  position: fixed;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 30;
}

.dock {
  display: flex;
  align-items: flex-end;
  gap: 0.35rem;
  padding: 0.5rem 0.75rem;
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: 1rem;
  box-shadow: 0 8px 28px rgba(18, 16, 28, 0.25);
}

.dock-item {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.dock-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.8rem;
  height: 2.8rem;
  background: none;
  border: none;
  border-radius: 0.75rem;
  color: var(--ink-soft);
  transition: transform var(--transition-fast), color var(--transition-fast),
              background var(--transition-fast);
}

.dock-btn:hover {
  transform: translateY(-4px) scale(1.12);
  color: var(--violet);
  background: var(--surface-border);
}

.dock-tooltip {
  position: absolute;
  bottom: calc(100% + 0.5rem);
  padding: 0.25rem 0.6rem;
  background: var(--ink);
  color: var(--surface);
  font-size: var(--text-xs);
  font-weight: 600;
  border-radius: 0.4rem;
  white-space: nowrap;
  pointer-events: none;
}

/* === Sidebar shell === */
.shell {
  display: flex;
  min-height: 100vh;
}

.sidebar {
  position: sticky;
  top: 0;
  align-self: flex-start;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  width: 4.25rem;
  height: 100vh;
  padding: 1.25rem 0.75rem;
  background: var(--surface-card);
  border-right: 1px solid var(--surface-border);
  overflow: hidden;
  transition: width var(--transition-normal);
}

.sidebar.open {
  width: 14rem;
}

.sidebar-brand {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  color: var(--violet);
  padding: 0 0.3rem;
}

.sidebar-brand-label {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 700;
  white-space: nowrap;
}

.sidebar-links {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  flex: 1;
}

.sidebar-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.6rem;
  background: none;
  border: none;
  border-radius: 0.5rem;
  color: var(--ink-soft);
  font-size: var(--text-sm);
  font-weight: 600;
  white-space: nowrap;
}

.sidebar-link:hover {
  background: var(--surface-border);
  color: var(--violet);
}

.sidebar-link-icon {
  display: inline-flex;
  flex-shrink: 0;
}

.sidebar-signout {
  margin-top: auto;
}

.shell-main {
  flex: 1;
  padding: 2rem 1.5rem 6rem;
}

.shell-main.wide {
  padding: 2.5rem 3rem;
}

/* === Hero === */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  padding: 6rem 2rem 4rem;
  text-align: center;
  background: linear-gradient(160deg, var(--violet-deep), var(--violet) 55%, var(--orchid));
  color: #ffffff;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  line-height: 1.2;
  max-width: 44rem;
}

.hero-rotator {
  display: inline-block;
  min-width: 9ch;
  text-align: left;
}

.hero-rotate-word {
  display: inline-block;
  color: #ffe08a;
  animation: word-rise 500ms ease;
}

@keyframes word-rise {
  from {
    opacity: 0;
    transform: translateY(0.6em);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.hero-sub {
  font-size: var(--text-lg);
  max-width: 36rem;
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  margin-top: 0.5rem;
}

/* === Features === */
.features {
  padding: 0 2rem;
}

.features-layout {
  display: flex;
  gap: 3rem;
  max-width: 64rem;
  margin: 0 auto;
  align-items: center;
}

.features-steps {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.feature-step {
  display: flex;
  gap: 1rem;
  padding: 1rem;
  border-radius: 0.75rem;
  border: 1px solid transparent;
  cursor: pointer;
  opacity: 0.65;
  transition: opacity var(--transition-normal), border-color var(--transition-normal);
}

.feature-step.active {
  opacity: 1;
  border-color: var(--surface-border);
  background: var(--surface-card);
}

.feature-marker {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  flex-shrink: 0;
  border-radius: 999px;
  border: 2px solid var(--surface-border);
  color: var(--ink-muted);
}

.feature-marker.active {
  border-color: var(--violet);
  color: var(--violet);
}

.feature-number {
  font-weight: 700;
}

.feature-title {
  font-size: var(--text-lg);
  margin-bottom: 0.25rem;
}

.feature-content {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.features-panel {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: center;
}

.feature-panel-art {
  width: 100%;
  aspect-ratio: 4 / 3;
  border-radius: 1rem;
  display: flex;
  align-items: flex-end;
  padding: 1.25rem;
  color: #ffffff;
  animation: panel-fade 400ms ease;
}

.panel-0 { background: linear-gradient(135deg, var(--sky), var(--violet)); }
.panel-1 { background: linear-gradient(135deg, var(--violet), var(--orchid)); }
.panel-2 { background: linear-gradient(135deg, var(--orchid), var(--ember)); }

@keyframes panel-fade {
  from { opacity: 0; }
  to { opacity: 1; }
}

.feature-panel-step {
  font-size: var(--text-sm);
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.features-dots {
  display: flex;
  gap: 0.5rem;
}

.feature-dot {
  width: 0.6rem;
  height: 0.6rem;
  border-radius: 999px;
  border: none;
  background: var(--surface-border);
}

.feature-dot.active {
  background: var(--violet);
}

/* === Community === */
.community {
  padding: 0 2rem;
}

.community-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
  gap: 1.5rem;
  max-width: 70rem;
  margin: 0 auto;
}

.story-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1rem;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.story-card:hover {
  transform: translateY(-4px);
  box-shadow: 0 10px 28px rgba(18, 16, 28, 0.18);
}

.story-cover {
  width: 100%;
  aspect-ratio: 3 / 2;
  border-radius: 0.5rem;
  margin-bottom: 0.5rem;
}

.cover-0 { background: linear-gradient(135deg, var(--fern), var(--sky)); }
.cover-1 { background: linear-gradient(135deg, var(--sky), var(--violet)); }
.cover-2 { background: linear-gradient(135deg, var(--orchid), var(--ember)); }
.cover-3 { background: linear-gradient(135deg, var(--violet-deep), var(--orchid)); }

.story-title {
  font-size: var(--text-lg);
}

.story-author {
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.story-excerpt {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  flex: 1;
}

.story-read {
  align-self: flex-start;
}

/* === CTA banner === */
.cta-banner {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  margin: 0 2rem;
  padding: 3.5rem 2rem;
  border-radius: 1rem;
  background: linear-gradient(135deg, var(--violet-deep), var(--orchid));
  color: #ffffff;
  text-align: center;
}

.cta-banner .section-title {
  margin-bottom: 0;
}

.cta-sub {
  opacity: 0.9;
}

.cta-actions {
  display: flex;
  gap: 1rem;
  margin-top: 0.5rem;
}

/* === Footer === */
.site-footer {
  background: var(--surface-card);
  border-top: 1px solid var(--surface-border);
  padding: 2.5rem 2rem 1.5rem;
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
  gap: 2rem;
  max-width: 70rem;
  margin: 0 auto;
}

.footer-brand {
  font-family: var(--font-serif);
  color: var(--violet);
  margin-bottom: 0.5rem;
}

.footer-blurb {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.footer-heading {
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.06em;
  margin-bottom: 0.75rem;
}

.footer-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.footer-link {
  background: none;
  border: none;
  padding: 0;
  font-size: var(--text-sm);
  color: var(--ink-soft);
  text-decoration: none;
}

.footer-link:hover {
  color: var(--violet);
}

.footer-social {
  display: flex;
  gap: 0.75rem;
}

.footer-social-link {
  color: var(--ink-soft);
}

.footer-social-link:hover {
  color: var(--violet);
}

.footer-contact {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--ink-soft);
}

.footer-copyright {
  text-align: center;
  font-size: var(--text-xs);
  color: var(--ink-muted);
  margin-top: 2rem;
}

/* === Dashboard === */
.dashboard {
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
  max-width: 60rem;
  margin: 0 auto;
}

.dashboard-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
}

.dashboard-sub {
  color: var(--ink-soft);
  margin-top: 0.4rem;
}

.dashboard-heading {
  font-size: var(--text-lg);
  margin-bottom: 1rem;
}

.stat-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
  gap: 1rem;
}

.stat-card {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1.25rem;
  border-radius: 0.75rem;
  color: #ffffff;
}

.stat-blue { background: linear-gradient(135deg, var(--sky), var(--violet)); }
.stat-purple { background: linear-gradient(135deg, var(--violet), var(--orchid)); }
.stat-green { background: linear-gradient(135deg, var(--fern), var(--sky)); }

.stat-value {
  font-size: var(--text-xl);
  font-weight: 700;
}

.stat-label {
  font-size: var(--text-sm);
  opacity: 0.9;
}

.quickstart-actions {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
}

.activity-filters {
  display: flex;
  gap: 0.35rem;
}

.activity-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.activity-row {
  display: flex;
  gap: 1rem;
  align-items: baseline;
  font-size: var(--text-sm);
}

.activity-time {
  color: var(--ink-muted);
  font-size: var(--text-xs);
  white-space: nowrap;
}

.activity-text {
  color: var(--ink-soft);
}

.story-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.story-row {
  border-bottom: 1px solid var(--surface-border);
  padding-bottom: 1.25rem;
}

.story-row:last-child {
  border-bottom: none;
  padding-bottom: 0;
}

.story-row-top {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 1rem;
}

.story-row-title {
  font-size: var(--text-base);
}

.story-row-meta,
.story-row-edited {
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.story-row-progress {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 0.75rem;
}

.story-row-pct {
  font-size: var(--text-xs);
  color: var(--ink-muted);
  min-width: 2.5rem;
  text-align: right;
}

.empty-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 2rem 0;
  color: var(--ink-muted);
  text-align: center;
}

/* === Workspace pages === */
.workspace {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  max-width: 60rem;
  margin: 0 auto;
}

.workspace-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 1.5rem;
}

.workspace-copy {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  margin-bottom: 1rem;
}

/* === Sign-in modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(10, 9, 16, 0.55);
}

.modal-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  width: min(22rem, 90vw);
  padding: 2rem;
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: 1rem;
  text-align: center;
}

.modal-icon {
  color: var(--violet);
}

.modal-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
}

.modal-text {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.modal-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 0.5rem;
}
"#;
