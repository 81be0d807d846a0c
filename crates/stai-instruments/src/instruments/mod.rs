pub mod stai;
