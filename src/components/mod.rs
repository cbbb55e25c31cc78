pub mod design_system;

mod admin;
mod chat;
mod documents;
mod faq;
mod history;
mod layout;
mod upload;

pub use admin::AdminSection;
pub use chat::ChatSection;
pub use documents::DocumentsSection;
pub use faq::FaqSection;
pub use history::HistorySection;
pub use layout::NavBar;
pub use upload::UploadSection;
