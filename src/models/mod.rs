// Models module
// Configuration types shared by the services and displays

pub mod settings;
