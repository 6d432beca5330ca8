use crate::app::App;

mod app;

fn main() {
    app::logging::init(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
