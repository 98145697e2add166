//! Route views.

pub mod about;
pub mod apply;
pub mod career_detail;
pub mod careers;
pub mod contact;
pub mod faq;
pub mod home;
pub mod product_detail;
pub mod products;

pub use about::AboutPage;
pub use apply::ApplyPage;
pub use career_detail::CareerDetailPage;
pub use careers::CareersPage;
pub use contact::ContactPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;

/// Submission lifecycle shared by the application and inquiry forms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum SubmitState {
    Idle,
    Submitting,
    Sent,
}

/// Delay before a successfully submitted form resets to its pristine
/// state.
pub(crate) const RESET_DELAY_MS: u64 = 2500;
