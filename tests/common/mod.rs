pub mod synthetic_print;
