pub mod synthetic_swing;
