pub mod buttons;
pub mod forms;
