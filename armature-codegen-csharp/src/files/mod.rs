mod generated_controller;
mod partner_controller;

pub use generated_controller::GeneratedController;
pub use partner_controller::PartnerController;
