fn main() {
    signal_dashboard_wasm::start();
}
