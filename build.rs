fn main() {
    #[cfg(feature = "ui")]
    slint_build::compile("ui/board.slint").expect("Slint build failed");
}
