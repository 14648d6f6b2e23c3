// Reusable presentational primitives. Style variants are closed enums
// resolved through lookup tables; no business logic lives here.

pub mod animations;
pub mod badge;
pub mod button;
pub mod card;
pub mod spinner;

pub use animations::Motion;
pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle, CardHover, CardSize, CardVariant};
pub use spinner::{LoadingSpinner, SpinnerSize, SpinnerVariant};
