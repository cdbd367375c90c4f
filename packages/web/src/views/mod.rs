mod checklists;
pub use checklists::Checklists;

mod checklist_detail;
pub use checklist_detail::ChecklistDetail;

mod login;
pub use login::Login;

mod register;
pub use register::Register;
