fn main() {
    // Propagates the ESP-IDF link environment for --features espidf builds;
    // emits nothing on plain host builds.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
