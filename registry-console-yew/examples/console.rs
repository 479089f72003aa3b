use registry_console_yew::App;

fn main() {
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting registry console");

    yew::Renderer::<App>::new().render();
}
