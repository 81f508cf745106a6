//! Presentation logic for the portfolio page, kept free of any DOM types so
//! that the scroll/animation math can be exercised with synthetic fixtures.

pub mod progress;
pub mod scroll;
pub mod section;
pub mod theme;
pub mod typing;
