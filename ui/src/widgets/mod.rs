//! Platform-agnostic state machines behind the landing page widgets. The
//! Dioxus components in `crate::components` own the timers and rendering.

pub mod countdown;
pub mod gallery;
pub mod signup;
pub mod slider;
