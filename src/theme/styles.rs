//! Global CSS styles for the Design Center site.
//!
//! Warm neutrals with a brass accent; serif headings over a sans body.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --paper: #ffffff;
  --sand: #f5e6d3;
  --stone: #f3f4f6;
  --ink: #1f2937;
  --ink-muted: #4b5563;

  /* Accent */
  --brass: #c5a267;
  --brass-soft: rgba(197, 162, 103, 0.25);

  /* Overlays */
  --scrim: rgba(0, 0, 0, 0.5);
  --shade: rgba(0, 0, 0, 0.3);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-slow: 500ms ease-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
}

.icon {
  width: 24px;
  height: 24px;
}

/* === Header === */
.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem 2rem;
}

.site-brand {
  font-family: var(--font-serif);
  font-size: 1.5rem;
}

.site-nav a {
  color: var(--ink-muted);
  text-decoration: none;
}

/* === Entrance Animation === */
.fade-up {
  opacity: 0;
  animation: fade-up 0.8s cubic-bezier(0.22, 1, 0.36, 1) forwards;
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Projects Section === */
.projects {
  position: relative;
  padding: 5rem 2rem;
  max-width: 80rem;
  margin: 0 auto;
  overflow: hidden;
}

.projects-title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  text-align: center;
  margin-bottom: 3rem;
}

/* === Carousel === */
.carousel {
  position: relative;
  transition: filter var(--transition-slow);
}

.carousel--blurred {
  filter: blur(16px);
}

.carousel__viewport {
  position: relative;
  overflow: hidden;
}

.carousel__strip {
  display: flex;
  transition: transform var(--transition-slow);
}

.category-card {
  flex-shrink: 0;
  padding: 0 1rem;
  cursor: pointer;
}

.category-card--disabled {
  cursor: not-allowed;
}

.category-card--disabled.fade-up {
  animation-name: fade-up-dim;
}

@keyframes fade-up-dim {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 0.5; transform: translateY(0); }
}

.category-card__frame {
  position: relative;
  height: 16rem;
  overflow: hidden;
  border-radius: 0.5rem;
}

.category-card__image,
.category-card__shade {
  position: absolute;
  inset: 0;
}

.category-card__image {
  background-size: cover;
  background-position: center;
  transition: transform var(--transition-slow);
}

.category-card:not(.category-card--disabled):hover .category-card__image {
  transform: scale(1.05);
}

.category-card__shade {
  background: var(--shade);
}

.category-card__title {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--paper);
  font-family: var(--font-serif);
  font-size: 1.5rem;
  font-weight: normal;
}

.nav-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.8);
  color: var(--ink);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.nav-arrow:hover {
  background: var(--paper);
}

.nav-arrow--prev { left: 0.5rem; }
.nav-arrow--next { right: 0.5rem; }

/* === Style Picker === */
.style-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--scrim);
}

.style-overlay__body {
  position: relative;
  width: 100%;
  max-width: 64rem;
  padding: 3rem 1rem 0;
}

.overlay-close {
  position: absolute;
  top: 0;
  right: 0;
  padding: 0.5rem;
  border: none;
  background: transparent;
  color: var(--paper);
  cursor: pointer;
}

.style-cards {
  display: flex;
  justify-content: center;
  gap: 2rem;
}

.style-card {
  width: 16rem;
  height: 16rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  padding: 2rem;
  border-radius: 0.5rem;
  background: var(--sand);
  color: var(--ink);
  cursor: pointer;
  opacity: 0;
  transform: translateY(50px);
  animation: slide-up 0.5s ease-out forwards;
  transition: box-shadow var(--transition-slow);
}

.style-card:hover {
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
}

@keyframes slide-up {
  to { opacity: 1; transform: translateY(0); }
}

.style-card__icon {
  width: 4rem;
  height: 4rem;
}

.style-card__name {
  font-size: 1.25rem;
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  flex-direction: column;
  background: var(--paper);
}

.lightbox__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
}

.lightbox__title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  font-weight: normal;
}

.lightbox__close {
  padding: 0.5rem;
  border: none;
  background: transparent;
  color: var(--ink-muted);
  cursor: pointer;
  transition: color var(--transition-fast);
}

.lightbox__close:hover {
  color: var(--ink);
}

.lightbox__stage {
  position: relative;
  flex: 1;
  min-height: 0;
}

.lightbox__image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: contain;
  opacity: 0;
  transition: opacity var(--transition-slow);
}

.lightbox__image--loaded {
  opacity: 1;
}

.lightbox__spinner {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
}

.loading-spinner {
  width: 48px;
  height: 48px;
  border: 4px solid var(--brass);
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.lightbox__arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.8);
  color: var(--ink);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.lightbox__arrow:hover {
  background: var(--paper);
}

.lightbox__arrow--prev { left: 1rem; }
.lightbox__arrow--next { right: 1rem; }

/* === Thumbnail Strip === */
.thumbnail-strip {
  height: 6rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0 1rem;
  overflow-x: auto;
  background: var(--stone);
}

.thumbnail {
  height: 4rem;
  width: 6rem;
  flex-shrink: 0;
  cursor: pointer;
  transition: box-shadow var(--transition-fast);
}

.thumbnail--active {
  box-shadow: 0 0 0 2px var(--brass);
}

.thumbnail__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.5;
  transition: opacity var(--transition-fast);
}

.thumbnail__image--loaded {
  opacity: 1;
}
"#;
