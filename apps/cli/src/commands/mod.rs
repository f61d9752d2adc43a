pub mod doctor;
pub mod run;

pub use doctor::DoctorCommand;
pub use run::RunCommand;
