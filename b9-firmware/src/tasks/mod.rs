// Task-Modul: Enthält alle Embassy Tasks
//
// Der Roboter läuft als ein einziger Task. Alle Wartezeiten darin sind
// Embassy-Timer, main() und der Executor bleiben damit reaktionsfähig.

pub mod robot;

// Re-export Tasks für einfachen Import
pub use robot::{RobotPeripherals, robot_task};
