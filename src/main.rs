#[cfg(feature = "gui")]
mod main_gui;

#[cfg(not(any(feature = "cli", feature = "gui")))]
compile_error!("enable the `cli` or `gui` feature");

#[cfg(feature = "gui")]
fn main() {
    main_gui::main();
}

#[cfg(all(feature = "cli", not(feature = "gui")))]
fn main() {
    formula_builder::cli::main();
}
