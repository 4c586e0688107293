// Headless tab strip: builds a strip from settings, plays a short scripted
// interaction against it and prints the draw commands of each frame.
//
// Usage: tabkit-demo [--write-defaults] [settings.json]

mod settings;

use std::rc::Rc;

use tabkit_button::{FieldEditor, TabButtonBuilder, TabEvent, TabStrip};
use tabkit_core::{
    BundledAssets, Color, DrawCommand, Font, MonospaceMeasure, Rect, RecordingSurface,
    TextAlignment, Vec2,
};

use settings::DemoSettings;

/// A line editor that just keeps its text.
#[derive(Default)]
struct LineEditor {
    text: String,
    frame: Rect,
}

impl FieldEditor for LineEditor {
    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
    fn set_draws_background(&mut self, _draws: bool) {}
    fn set_horizontally_resizable(&mut self, _resizable: bool) {}
    fn set_editable(&mut self, _editable: bool) {}
    fn set_font(&mut self, _font: &Font) {}
    fn set_alignment(&mut self, _alignment: TextAlignment) {}
    fn set_text_color(&mut self, _color: Color) {}
    fn set_string(&mut self, text: &str) {
        self.text = text.to_string();
    }
    fn insert_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
    fn select_all(&mut self) {}
    fn string(&self) -> String {
        self.text.clone()
    }
    fn end_editing(&mut self) {
        log::debug!("Editor released at {:?}", self.frame);
    }
}

fn build_strip(settings: &DemoSettings) -> TabStrip {
    let style = settings.style.build(Rc::new(MonospaceMeasure::default()));
    let mut strip = TabStrip::new(style);
    for (index, tab) in settings.tabs.iter().enumerate() {
        let builder = TabButtonBuilder::new(tab.title.as_str())
            .item(index as u64)
            .closable(tab.closable)
            .editable(tab.editable)
            .disabled(tab.disabled)
            .menu(tab.menu.clone());
        if let Err(e) = strip.push(builder) {
            log::error!("Skipping tab {:?}: {}", tab.title, e);
        }
    }
    strip
}

fn print_frame(label: &str, strip: &mut TabStrip) {
    let mut surface = RecordingSurface::new();
    strip.draw(&mut surface, &BundledAssets);
    println!("── {} ──", label);
    for command in surface.commands() {
        match command {
            DrawCommand::Fill { rect, color } => println!("  fill     {:?} {:?}", rect, color),
            DrawCommand::Gradient { rect, top, bottom } => {
                println!("  gradient {:?} {:?} → {:?}", rect, top, bottom)
            }
            DrawCommand::Image { image, rect } => println!("  image    {:?} {:?}", image.source, rect),
            DrawCommand::Text { text, rect } => println!("  text     {:?} {:?}", text.text, rect),
        }
    }
    for &id in strip.ids() {
        if let Some(tooltip) = strip.button(id).and_then(|b| b.tooltip()) {
            println!("  tooltip  #{} {:?}", id, tooltip);
        }
    }
}

fn report(event: Option<TabEvent>) {
    match event {
        Some(event) => log::info!("{:?}", event),
        None => log::info!("No event"),
    }
}

fn main() {
    env_logger::init();

    let mut write_defaults = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--write-defaults" {
            write_defaults = true;
        } else {
            path = Some(std::path::PathBuf::from(arg));
        }
    }

    if write_defaults {
        settings::save_settings(&DemoSettings::default());
        return;
    }

    let settings = match path.as_deref() {
        Some(path) => settings::load_settings_from(path),
        None => settings::load_settings(),
    };
    log::info!(
        "Preset {:?}, {} tabs, bar width {}",
        settings.style.preset,
        settings.tabs.len(),
        settings.bar_width
    );

    let mut strip = build_strip(&settings);
    let bar = Rect::new(0.0, 0.0, settings.bar_width, strip.recommended_height());
    strip.layout(bar);
    print_frame("initial", &mut strip);

    let Some(&first) = strip.ids().first() else {
        return;
    };
    let Some(first_frame) = strip.frame_of(first) else {
        return;
    };

    // Click the first tab, then hover it so its close button shows.
    let center = Vec2::new(first_frame.mid_x(), first_frame.mid_y());
    report(strip.click(center));
    strip.mouse_moved(center, false);
    print_frame("first tab selected and hovered", &mut strip);

    // Rename the first tab.
    let mut editor = LineEditor::default();
    let outcome = match strip.edit_title(first, &mut editor) {
        Ok(mut session) => {
            session.editor().set_string("Renamed");
            Some(session.commit())
        }
        Err(e) => {
            log::info!("Tab {} not editable: {}", first, e);
            None
        }
    };
    if let Some(outcome) = outcome {
        report(strip.title_edited(first, &outcome));
    }

    // Squeeze the bar so long titles fall back to tooltips.
    strip.layout(Rect::new(0.0, 0.0, settings.bar_width / 3.0, bar.height));
    print_frame("narrow bar", &mut strip);
}
