use chrono::Local;

use sailor::ui::widgets::{
    Combo, Composite, DateCombo, Edit, Labeled, Panel, SelectDate, SelectList, Text,
};
use sailor::{Config, IntoControl};

fn build_form() -> Panel {
    let start = Local::now().date_naive();
    Panel::new(vec![
        Text::new("Tab/arrows move, Enter opens, Esc quits").boxed(),
        Labeled::new("Name", Edit::new("").with_id("name")).boxed(),
        Labeled::new("Role", Combo::new(["Captain", "Navigator", "Cook"], 0).with_id("role")).boxed(),
        Labeled::new("Departure", DateCombo::new(start).with_id("departure")).boxed(),
        Labeled::new(
            "Cabin",
            Composite::new(vec![
                Combo::new(["Fore", "Aft"], 0).with_id("deck").boxed(),
                Combo::new(["Port", "Starboard"], 0).with_id("side").boxed(),
            ])
            .margin(1),
        )
        .boxed(),
        Labeled::new(
            "Ship",
            SelectList::new(["Argo", "Beagle", "Endeavour", "Victory"], 0)
                .with_size(20, 3)
                .with_id("ship"),
        )
        .boxed(),
        Labeled::new("Return", SelectDate::new(start).with_id("return")).boxed(),
    ])
    .caption("Crew sign-up")
}

fn main() -> sailor::Result<()> {
    let config = match std::env::var_os("SAILOR_CONFIG") {
        Some(path) => Config::load(path.as_ref())?,
        None => Config::default(),
    };
    let _logging = sailor::logging::init(&config);

    let app = sailor::tui::walk_with_config(build_form(), config)?;

    let name = app.find_as::<Edit>("name")?.value().to_string();
    let role = app.find_as::<Combo>("role")?.value().unwrap_or("").to_string();
    let departure = app.find_as::<DateCombo>("departure")?.value();
    let ship = app.find_as::<SelectList>("ship")?.value().unwrap_or("").to_string();
    println!("name: {name}");
    println!("role: {role}");
    println!("departure: {departure}");
    println!("ship: {ship}");
    Ok(())
}
