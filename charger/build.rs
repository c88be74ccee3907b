// ABOUTME: Build script that compiles the charger .slint UI into Rust code.
// ABOUTME: Generates the ChargerWindow component and its model structs.

fn main() {
    slint_build::compile("ui/charger.slint").unwrap();
}
