pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;          /* Brand blue */
  --primary-light: #60A5FA;
  --primary-dark: #2563EB;
  --accent: #8B5CF6;           /* Purple accent */
  --accent-warm: #EC4899;      /* Pink highlight */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: #FFFFFF;
  --surface-raised: var(--neutral-50);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Borders */
  --border: var(--neutral-200);
  --border-focus: var(--primary);

  /* Gradients */
  --gradient-brand: linear-gradient(90deg, var(--primary), var(--accent));
  --gradient-rail: linear-gradient(180deg, var(--primary), var(--accent), var(--accent-warm));
  --gradient-progress: linear-gradient(90deg, #2563EB, #7C3AED, #DB2777);

  /* Layout */
  --sidebar-width: 25%;
  --mobile-header-height: 64px;
  --content-max: 1100px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-glow: 0 20px 50px rgba(59, 130, 246, 0.25);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 600ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark mode: the theme controller toggles this class on the document root. */
.dark {
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --surface-raised: var(--neutral-800);

  --text-primary: #F9FAFB;
  --text-secondary: var(--neutral-400);
  --text-tertiary: var(--neutral-500);

  --border: var(--neutral-800);
  --border-focus: var(--primary-light);

  --primary: #60A5FA;
  --primary-dark: #3B82F6;

  --shadow-glow: 0 20px 50px rgba(59, 130, 246, 0.12);
}
"#;
