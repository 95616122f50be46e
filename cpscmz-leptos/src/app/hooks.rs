pub mod use_reveal;
