use rusted_render::demo::DemoGame;
use rusted_render::settings::GameSettings;

fn main() {
    let settings = GameSettings::load();
    if let Err(err) = rusted_render::run(DemoGame::new(settings)) {
        eprintln!("Application error: {err}");
    }
}
