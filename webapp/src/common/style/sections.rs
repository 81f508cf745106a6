pub const SECTION_STYLES: &str = r#"
/* Content sections */
.section {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding: var(--space-16) var(--space-8);
}

.section-inner {
  position: relative;
  width: 100%;
  max-width: var(--content-max);
  margin: 0 auto;
}

.section-inner.narrow {
  max-width: 820px;
}

.section-heading {
  font-size: 2rem;
  font-weight: 700;
  color: var(--text-primary);
  margin-bottom: var(--space-3);
}

.section-subheading {
  color: var(--text-secondary);
  margin-bottom: var(--space-12);
}

/* Decorative parallax blobs */
.deco-blob {
  position: absolute;
  top: 40%;
  width: 320px;
  height: 320px;
  border-radius: var(--radius-full);
  background-image: radial-gradient(circle, rgba(59, 130, 246, 0.12), rgba(139, 92, 246, 0.08));
  filter: blur(64px);
  pointer-events: none;
  z-index: -1;
}

.deco-right { right: -96px; }
.deco-left { left: -96px; }
.deco-blob.alt {
  background-image: radial-gradient(circle, rgba(45, 212, 191, 0.12), rgba(59, 130, 246, 0.08));
}
.deco-blob.warm {
  background-image: radial-gradient(circle, rgba(236, 72, 153, 0.12), rgba(139, 92, 246, 0.08));
}
.deco-blob.cool {
  background-image: radial-gradient(circle, rgba(59, 130, 246, 0.12), rgba(45, 212, 191, 0.08));
}

/* Hero */
.hero {
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  z-index: -1;
  background-image: linear-gradient(135deg, rgba(59, 130, 246, 0.08), transparent 40%, rgba(139, 92, 246, 0.08));
}

.hero-blob {
  position: absolute;
  width: 384px;
  height: 384px;
  border-radius: var(--radius-full);
  filter: blur(72px);
}

.hero-blob.blob-a {
  top: 25%;
  right: 25%;
  background-image: radial-gradient(circle, rgba(59, 130, 246, 0.2), rgba(139, 92, 246, 0.2));
  animation: blob-pulse-a 20s ease-in-out infinite;
}

.hero-blob.blob-b {
  bottom: 25%;
  left: 25%;
  background-image: radial-gradient(circle, rgba(139, 92, 246, 0.2), rgba(236, 72, 153, 0.2));
  animation: blob-pulse-b 25s ease-in-out infinite;
}

@keyframes blob-pulse-a {
  0%, 100% { transform: scale(1) rotate(0deg); opacity: 0.3; }
  50% { transform: scale(1.2) rotate(90deg); opacity: 0.5; }
}

@keyframes blob-pulse-b {
  0%, 100% { transform: scale(1.2) rotate(0deg); opacity: 0.5; }
  50% { transform: scale(1) rotate(-90deg); opacity: 0.3; }
}

.hero-content {
  width: 100%;
  max-width: var(--content-max);
  margin: 0 auto;
}

.hero-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
}

.hero-copy {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.hero-greeting {
  color: var(--primary);
}

.hero-name {
  font-size: clamp(2rem, 6vw, 3rem);
  line-height: 1.2;
  color: var(--text-primary);
}

.hero-role h2 {
  font-size: clamp(1.25rem, 4vw, 2rem);
  background-image: var(--gradient-brand);
  background-clip: text;
  -webkit-background-clip: text;
  color: transparent;
  min-height: 1.4em;
}

.hero-tagline {
  color: var(--text-secondary);
  max-width: 560px;
  line-height: 1.75;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  padding-top: var(--space-2);
}

/* One-shot intro animations, staggered by element */
.intro {
  opacity: 0;
  animation: intro-rise var(--transition-slow) var(--easing-standard) forwards;
}

.intro-1 { animation-delay: 150ms; }
.intro-2 { animation-delay: 300ms; }
.intro-3 { animation-delay: 450ms; }
.intro-4 { animation-delay: 600ms; }
.intro-5 { animation-delay: 750ms; }

@keyframes intro-rise {
  from {
    opacity: 0;
    transform: translateY(24px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.hero-portrait {
  display: flex;
  justify-content: center;
}

.portrait-card {
  position: relative;
  width: min(360px, 70vw);
  aspect-ratio: 1;
  animation: float-loop 4s ease-in-out infinite;
}

.portrait-glow {
  position: absolute;
  inset: 0;
  border-radius: var(--radius-xl);
  background-image: radial-gradient(circle, rgba(59, 130, 246, 0.2), rgba(139, 92, 246, 0.2));
  filter: blur(32px);
}

.portrait-image {
  position: relative;
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: var(--radius-xl);
  border: 4px solid rgba(59, 130, 246, 0.3);
  box-shadow: var(--shadow-lg);
}

@keyframes float-loop {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
}

.scroll-indicator-track {
  width: 24px;
  height: 40px;
  border: 2px solid var(--neutral-400);
  border-radius: var(--radius-full);
  display: flex;
  justify-content: center;
  padding-top: var(--space-2);
}

.scroll-indicator-dot {
  width: 6px;
  height: 6px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  animation: indicator-drop 2s ease-in-out infinite;
}

@keyframes indicator-drop {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(16px); }
}

/* About */
.about-paragraphs {
  display: flex;
  flex-direction: column;
  gap: var(--space-5);
  color: var(--text-secondary);
  line-height: 1.75;
}

.about-quote {
  margin-top: var(--space-12);
  padding-top: var(--space-8);
  border-top: 1px solid var(--border);
}

.quote-text {
  color: var(--text-tertiary);
  font-style: italic;
}

/* Experience timeline */
.timeline {
  position: relative;
}

.timeline-rail {
  position: absolute;
  left: 10px;
  top: 0;
  bottom: 0;
  width: 2px;
  background-image: var(--gradient-rail);
}

.timeline-entries {
  display: flex;
  flex-direction: column;
  gap: var(--space-10);
}

.timeline-entry {
  position: relative;
  padding-left: var(--space-12);
}

.timeline-dot {
  position: absolute;
  left: 2px;
  top: var(--space-6);
  width: 18px;
  height: 18px;
  border-radius: var(--radius-full);
  background-image: var(--gradient-brand);
  border: 4px solid var(--background);
  z-index: 1;
}

.job-card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.job-card:hover {
  transform: translateY(-5px) scale(1.01);
  box-shadow: var(--shadow-glow);
}

.job-role {
  color: var(--text-primary);
  margin-bottom: var(--space-2);
}

.job-company {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--primary);
  font-weight: 500;
  margin-bottom: var(--space-3);
}

.job-meta {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.job-meta-item {
  display: flex;
  align-items: center;
  gap: var(--space-1);
}

.job-highlights {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  color: var(--text-secondary);
}

.job-highlights li {
  display: flex;
  gap: var(--space-3);
}

.bullet-mark {
  color: var(--primary);
  flex-shrink: 0;
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-5);
}

.skill-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  transition: transform var(--transition-normal) var(--easing-standard),
              border-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.skill-card:hover {
  transform: translateY(-8px);
  border-color: var(--primary);
  box-shadow: var(--shadow-glow);
}

.skill-logo {
  width: 40px;
  height: 40px;
  object-fit: contain;
}

.dark .skill-logo {
  filter: brightness(0.9);
}

.skill-name {
  font-size: 0.875rem;
  color: var(--text-primary);
  text-align: center;
}

.skills-footnote {
  margin-top: var(--space-12);
  padding-top: var(--space-8);
  border-top: 1px solid var(--border);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Projects */
.project-rows {
  display: flex;
  flex-direction: column;
  gap: var(--space-16);
}

.project-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-10);
  align-items: center;
}

.project-row.flipped .project-visual {
  order: 2;
}

.project-visual {
  position: relative;
  border-radius: var(--radius-lg);
  overflow: hidden;
  background-color: var(--surface-raised);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.project-visual:hover {
  transform: scale(1.02);
}

.project-image {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
  display: block;
}

.project-visual-overlay {
  position: absolute;
  inset: 0;
  background-image: linear-gradient(to top, rgba(17, 24, 39, 0.6), transparent);
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.project-visual:hover .project-visual-overlay {
  opacity: 1;
}

.project-info {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.project-title {
  color: var(--text-primary);
}

.project-description {
  color: var(--text-secondary);
  line-height: 1.6;
}

.project-links {
  display: flex;
  gap: var(--space-4);
  padding-top: var(--space-2);
}

.projects-more {
  text-align: center;
  margin-top: var(--space-16);
}

/* Contact */
.contact-form {
  margin-bottom: var(--space-12);
}

.contact-details {
  padding-top: var(--space-8);
  border-top: 1px solid var(--border);
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-8);
}

.detail-label {
  font-size: 0.875rem;
  color: var(--text-tertiary);
  margin-bottom: var(--space-1);
}

.detail-value {
  color: var(--text-primary);
}

a.detail-value:hover {
  color: var(--primary);
}

/* Footer */
.site-footer {
  position: relative;
  background-color: var(--surface);
  border-top: 1px solid var(--border);
  padding: var(--space-12) var(--space-8) var(--space-6);
}

.footer-accent {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 4px;
  background-image: var(--gradient-progress);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: var(--space-8);
  max-width: var(--content-max);
  margin: 0 auto var(--space-8);
}

.footer-grid h4 {
  color: var(--text-primary);
  margin-bottom: var(--space-4);
}

.footer-blurb {
  color: var(--text-secondary);
  font-size: 0.875rem;
  max-width: 320px;
}

.footer-nav {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  align-items: flex-start;
}

.footer-link {
  border: none;
  background: transparent;
  padding: 0;
  color: var(--text-secondary);
  font: inherit;
  font-size: 0.875rem;
  cursor: pointer;
  transition: color var(--transition-fast) var(--easing-standard);
}

.footer-link:hover {
  color: var(--primary);
}

.footer-bottom {
  max-width: var(--content-max);
  margin: 0 auto;
  padding-top: var(--space-6);
  border-top: 1px solid var(--border);
  font-size: 0.75rem;
  color: var(--text-tertiary);
}

/* Responsive collapse */
@media (max-width: 900px) {
  .section {
    padding: var(--space-12) var(--space-4);
  }

  .hero-grid,
  .project-row {
    grid-template-columns: 1fr;
  }

  .project-row.flipped .project-visual {
    order: 0;
  }

  .skills-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .form-grid,
  .contact-details,
  .footer-grid {
    grid-template-columns: 1fr;
  }

  .scroll-indicator {
    display: none;
  }
}
"#;
