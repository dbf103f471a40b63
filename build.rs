fn main() {
    // Host builds need nothing; the board build pulls the ESP-IDF env.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
