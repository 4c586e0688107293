#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use tabkit_core::{
        Asset, BundledAssets, Color, DrawCommand, Font, Image, ImageSource, Rect,
        RecordingSurface, Size, TextAlignment, TextMeasure, Vec2,
    };
    use tabkit_style::{
        ChromeStyle, CloseButtonPosition, DefaultStyle, SelectionState, Style, TabPosition,
        TabWidth, Theme,
    };

    use crate::*;

    /// 7 units per char, 16 units tall.
    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        fn measure(&self, text: &str, _font: &Font) -> Size {
            Size::new(text.chars().count() as f32 * 7.0, 16.0)
        }
    }

    fn style() -> Rc<dyn Style> {
        Rc::new(DefaultStyle::new(Theme::default_theme(), Rc::new(FixedMeasure)))
    }

    fn cell(title: &str) -> TabButtonCell {
        TabButtonCell::new(title, style())
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    const TAB: Rect = Rect::new(0.0, 0.0, 200.0, 24.0);

    #[derive(Default)]
    struct MockEditor {
        frame: Option<Rect>,
        draws_background: Option<bool>,
        resizable: bool,
        editable: bool,
        font: Option<Font>,
        alignment: Option<TextAlignment>,
        color: Option<Color>,
        text: String,
        all_selected: bool,
        ended: usize,
    }

    impl FieldEditor for MockEditor {
        fn set_frame(&mut self, frame: Rect) {
            self.frame = Some(frame);
        }
        fn set_draws_background(&mut self, draws: bool) {
            self.draws_background = Some(draws);
        }
        fn set_horizontally_resizable(&mut self, resizable: bool) {
            self.resizable = resizable;
        }
        fn set_editable(&mut self, editable: bool) {
            self.editable = editable;
        }
        fn set_font(&mut self, font: &Font) {
            self.font = Some(font.clone());
        }
        fn set_alignment(&mut self, alignment: TextAlignment) {
            self.alignment = Some(alignment);
        }
        fn set_text_color(&mut self, color: Color) {
            self.color = Some(color);
        }
        fn set_string(&mut self, text: &str) {
            self.text = text.to_string();
        }
        fn insert_text(&mut self, text: &str) {
            self.text.push_str(text);
        }
        fn select_all(&mut self) {
            self.all_selected = true;
        }
        fn string(&self) -> String {
            self.text.clone()
        }
        fn end_editing(&mut self) {
            self.ended += 1;
        }
    }

    // ──────────────────────────────────────────
    // Layout engine
    // ──────────────────────────────────────────

    #[test]
    fn test_required_minimum_width() {
        let c = cell("Document.txt");
        // 12 chars × 7 + 2 × 5
        assert!(approx_eq(c.required_minimum_width(), 94.0));
    }

    #[test]
    fn test_wide_tab_has_room() {
        let c = cell("Document.txt");
        let rect = c.title_rect_for_bounds(TAB);
        assert!(approx_eq(rect.x, 10.0));
        assert!(approx_eq(rect.width, 190.0));
        assert!(approx_eq(rect.y, 3.5));
        assert!(c.has_room_to_draw_full_title(TAB));
    }

    #[test]
    fn test_narrow_tab_with_close_button_has_no_room() {
        let mut button = TabButtonBuilder::new("Document.txt")
            .style(style())
            .closable(true)
            .build(1)
            .unwrap();
        let bounds = Rect::new(0.0, 0.0, 40.0, 24.0);
        button.update_visuals(bounds);

        assert!(approx_eq(button.cell().close_button_width(), 16.0));
        // 40 − 10 − (16 + 10)
        assert!(approx_eq(button.cell().title_rect_for_bounds(bounds).width, 4.0));
        assert!(!button.cell().has_room_to_draw_full_title(bounds));
        assert_eq!(button.tooltip(), Some("Document.txt"));
        assert!(!button.is_alternative_title_icon_hidden());
    }

    #[test]
    fn test_tooltip_cleared_when_title_fits() {
        let mut button = TabButtonBuilder::new("Doc").style(style()).build(1).unwrap();
        button.update_visuals(TAB);
        assert_eq!(button.tooltip(), None);
        assert!(button.is_alternative_title_icon_hidden());
    }

    #[test]
    fn test_has_room_is_monotonic_in_width() {
        let mut c = cell("Quarterly report.numbers");
        c.set_close_button_width(16.0);
        c.set_menu(vec!["Duplicate".into()]);
        c.set_dragging(true);
        let mut seen_room = false;
        for w in (0..=600).step_by(5) {
            let room = c.has_room_to_draw_full_title(Rect::new(0.0, 0.0, w as f32, 24.0));
            assert!(!(seen_room && !room), "lost room when widening to {w}");
            seen_room |= room;
        }
        assert!(seen_room);
    }

    #[test]
    fn test_dragging_shrinks_title() {
        let mut c = cell("Doc");
        let before = c.title_rect_for_bounds(TAB);
        c.set_dragging(true);
        let after = c.title_rect_for_bounds(TAB);
        assert!(approx_eq(before.x, after.x));
        assert!(approx_eq(before.width - after.width, 10.0));
    }

    #[test]
    fn test_close_button_deduction_only_removes_space() {
        let mut c = cell("Doc");
        let without = c.title_rect_for_bounds(TAB).width;
        c.set_close_button_width(16.0);
        let with = c.title_rect_for_bounds(TAB).width;
        assert!(with <= without);
        assert!(approx_eq(without - with, 26.0));

        c.set_close_button_width(0.0);
        assert!(approx_eq(c.title_rect_for_bounds(TAB).width, without));
    }

    #[test]
    fn test_menu_deducts_popup() {
        let mut c = cell("Doc");
        let without = c.title_rect_for_bounds(TAB).width;
        c.set_menu(vec!["Rename".into()]);
        assert!(approx_eq(without - c.title_rect_for_bounds(TAB).width, 18.0));
        assert_eq!(c.popup_rect(TAB), Rect::new(184.0, 9.0, 8.0, 6.0));
    }

    #[test]
    fn test_empty_menu_shows_no_popup() {
        let mut c = cell("Doc");
        c.set_menu(Vec::new());
        assert!(!c.shows_menu());
        assert!(!c.popup_hit(Vec2::new(188.0, 12.0), TAB));
    }

    #[test]
    fn test_popup_hit() {
        let mut c = cell("Doc");
        c.set_menu(vec!["Rename".into()]);
        assert!(c.popup_hit(Vec2::new(188.0, 12.0), TAB));
        assert!(!c.popup_hit(Vec2::new(100.0, 12.0), TAB));
    }

    #[test]
    fn test_icon_deductions_compose() {
        let mut c = cell("Document.txt");
        c.set_has_icon(true);
        let rect = c.title_rect_for_bounds(TAB);
        // style pad 21, margin 10, attached icon 14
        assert!(approx_eq(rect.x, 45.0));
        assert!(approx_eq(rect.width, 155.0));
        // Room is judged before the attached-icon deduction: 94 <= 169.
        assert!(c.has_room_to_draw_full_title(TAB));
    }

    #[test]
    fn test_icon_frame_precedes_centered_title() {
        let mut c = cell("Doc");
        c.set_has_icon(true);
        let title = c.title_rect_for_bounds(TAB);
        let title_x = title.x + (title.width - c.required_minimum_width()) / 2.0;
        let icon = c.icon_frame(TAB);
        assert!(approx_eq(icon.max_x(), title_x));
        assert!(approx_eq(icon.width, 14.0));
        assert!(approx_eq(icon.y, 5.0));
    }

    #[test]
    fn test_degenerate_bounds_clamp_to_zero() {
        let mut c = cell("Document.txt");
        c.set_has_icon(true);
        c.set_close_button_width(16.0);
        c.set_menu(vec!["x".into()]);
        c.set_dragging(true);
        for w in [0.0, 3.0, 12.0, 30.0] {
            let rect = c.title_rect_for_bounds(Rect::new(0.0, 0.0, w, 24.0));
            assert!(rect.width >= 0.0);
            assert!(rect.height >= 0.0);
        }
        let tiny = c.title_rect_for_bounds(Rect::new(0.0, 0.0, 10.0, 4.0));
        assert!(tiny.width >= 0.0);
    }

    #[test]
    fn test_cell_size() {
        let mut c = cell("Document.txt");
        assert_eq!(c.cell_size(TAB), Size::new(120.0, 16.0));
        c.set_menu(vec!["x".into()]);
        assert_eq!(c.cell_size(TAB), Size::new(136.0, 16.0));
        c.set_menu(Vec::new());
        assert_eq!(c.cell_size(TAB), Size::new(120.0, 16.0));
    }

    #[test]
    fn test_close_button_frames() {
        assert_eq!(
            close_button_frame(TAB, CloseButtonPosition::Left),
            Rect::new(4.0, 4.0, 16.0, 16.0)
        );
        assert_eq!(
            close_button_frame(TAB, CloseButtonPosition::Right),
            Rect::new(180.0, 4.0, 16.0, 16.0)
        );
        let flat = close_button_frame(Rect::new(0.0, 0.0, 50.0, 6.0), CloseButtonPosition::Left);
        assert_eq!(flat.width, 0.0);
    }

    #[test]
    fn test_highlight_color_follows_appearance() {
        let dark = Color::white(0.2);
        assert!(highlight_color(dark, tabkit_core::Appearance::Dark).r > dark.r);
        let light = Color::white(0.9);
        assert!(highlight_color(light, tabkit_core::Appearance::Light).r < light.r);
    }

    // ──────────────────────────────────────────
    // State machine
    // ──────────────────────────────────────────

    #[test]
    fn test_selection_state_of_cell() {
        let mut c = cell("Doc");
        assert_eq!(c.selection_state(), SelectionState::Normal);
        c.select();
        assert_eq!(c.selection_state(), SelectionState::Selected);
        c.set_enabled(false);
        assert_eq!(c.selection_state(), SelectionState::Unselectable);
        c.set_enabled(true);
        c.deselect();
        assert_eq!(c.selection_state(), SelectionState::Normal);
    }

    #[test]
    fn test_select_does_not_touch_other_flags() {
        let mut c = cell("Doc");
        c.set_editable(true);
        c.begin_edit().unwrap();
        c.select();
        assert!(c.is_editing());
        assert!(c.is_enabled());
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_edit_round_trip() {
        let mut c = cell("Document.txt");
        c.set_editable(true);
        c.begin_edit().unwrap();
        assert!(c.is_editing());
        assert_eq!(c.title(), "");
        assert_eq!(c.title_before_edit(), Some("Document.txt"));
        c.end_edit("Document.txt").unwrap();
        assert!(!c.is_editing());
        assert_eq!(c.title(), "Document.txt");
    }

    #[test]
    fn test_begin_edit_rejected_when_not_allowed() {
        let mut c = cell("Doc");
        assert_eq!(c.begin_edit(), Err(TabError::NotEditable));

        c.set_editable(true);
        c.set_enabled(false);
        assert_eq!(c.begin_edit(), Err(TabError::NotEditable));
        assert_eq!(c.title(), "Doc");
        assert!(!c.is_editing());

        assert_eq!(c.end_edit("x"), Err(TabError::NotEditing));
        assert_eq!(c.title(), "Doc");
    }

    #[test]
    fn test_cells_clone_with_shared_style() {
        let mut c = cell("Doc");
        c.select();
        c.set_position(TabPosition::Trailing);
        let copy = c.clone();
        assert_eq!(copy.title(), "Doc");
        assert!(copy.is_selected());
        assert_eq!(copy.position(), TabPosition::Trailing);
        assert!(Rc::ptr_eq(copy.style(), c.style()));
    }

    #[test]
    fn test_needs_display_tracking() {
        let mut c = cell("Doc");
        assert!(c.take_needs_display());
        assert!(!c.needs_display());
        c.set_dragging(true);
        assert!(c.needs_display());
    }

    #[test]
    fn test_close_width_change_needs_display() {
        let mut c = cell("Doc");
        c.take_needs_display();
        c.set_close_button_width(16.0);
        assert!(c.take_needs_display());
        c.set_close_button_width(16.0);
        assert!(!c.needs_display());
        c.set_close_button_width(-3.0);
        assert_eq!(c.close_button_width(), 0.0);
        assert!(c.needs_display());
    }

    #[test]
    fn test_close_width_change_marks_strip_dirty() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A").closable(true)).unwrap();
        strip.layout(Rect::new(0.0, 0.0, 300.0, 24.0));
        strip.draw(&mut RecordingSurface::new(), &BundledAssets);
        assert!(strip.dirty().is_empty());

        // Taller bar, larger close button.
        strip.layout(Rect::new(0.0, 0.0, 300.0, 32.0));
        assert_eq!(strip.dirty(), vec![a]);
    }

    // ──────────────────────────────────────────
    // Editing session
    // ──────────────────────────────────────────

    #[test]
    fn test_session_primes_editor() {
        let mut c = cell("Document.txt");
        c.set_editable(true);
        let expected_frame = c.editing_rect(TAB);
        let mut editor = MockEditor::default();

        let session = EditSession::begin(&mut c, &mut editor, TAB).unwrap();
        assert_eq!(session.original_title(), "Document.txt");
        drop(session);

        assert_eq!(editor.frame, Some(expected_frame));
        assert_eq!(editor.draws_background, Some(false));
        assert!(editor.resizable);
        assert!(editor.editable);
        assert_eq!(editor.font, Some(Theme::default_theme().tab_button.title_font));
        assert_eq!(editor.alignment, Some(TextAlignment::Center));
        assert_eq!(editor.color, Some(Color::white(1.0 / 6.0)));
        assert!(editor.all_selected);
        assert_eq!(editor.ended, 1);
    }

    #[test]
    fn test_session_commit_uses_editor_text() {
        let mut c = cell("Document.txt");
        c.set_editable(true);
        let mut editor = MockEditor::default();

        let mut session = EditSession::begin(&mut c, &mut editor, TAB).unwrap();
        assert_eq!(session.editor().text, "Document.txt");
        session.editor().set_string("Notes.txt");
        let outcome = session.commit();

        assert!(outcome.changed());
        assert_eq!(outcome.title, "Notes.txt");
        assert_eq!(editor.ended, 1);
        assert_eq!(c.title(), "Notes.txt");
        assert!(!c.is_editing());
    }

    #[test]
    fn test_session_cancel_and_drop_restore_title() {
        let mut c = cell("Document.txt");
        c.set_editable(true);
        let mut editor = MockEditor::default();

        let mut session = EditSession::begin(&mut c, &mut editor, TAB).unwrap();
        session.editor().set_string("garbage");
        let outcome = session.cancel();
        assert!(!outcome.changed());
        assert_eq!(c.title(), "Document.txt");

        {
            let mut session = EditSession::begin(&mut c, &mut editor, TAB).unwrap();
            session.editor().set_string("abandoned");
        }
        assert_eq!(c.title(), "Document.txt");
        assert!(!c.is_editing());
        assert_eq!(editor.ended, 2);
    }

    #[test]
    fn test_session_refused_leaves_editor_untouched() {
        let mut c = cell("Doc");
        let mut editor = MockEditor::default();
        assert!(matches!(
            EditSession::begin(&mut c, &mut editor, TAB),
            Err(TabError::NotEditable)
        ));
        assert_eq!(editor.frame, None);
        assert_eq!(editor.ended, 0);
    }

    // ──────────────────────────────────────────
    // Buttons & strip
    // ──────────────────────────────────────────

    #[test]
    fn test_builder_requires_style() {
        let err = TabButtonBuilder::new("Doc").build(1).unwrap_err();
        assert_eq!(err, TabError::MissingStyle);
    }

    #[test]
    fn test_strip_flexible_layout_and_positions() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A")).unwrap();
        let b = strip.push(TabButtonBuilder::new("B")).unwrap();
        let c = strip.push(TabButtonBuilder::new("C")).unwrap();

        let frames = strip.layout(Rect::new(0.0, 0.0, 600.0, 24.0)).to_vec();
        assert_eq!(frames[0], (a, Rect::new(0.0, 0.0, 150.0, 24.0)));
        assert_eq!(frames[1], (b, Rect::new(150.0, 0.0, 150.0, 24.0)));
        assert_eq!(frames[2], (c, Rect::new(300.0, 0.0, 150.0, 24.0)));

        let frames = strip.layout(Rect::new(0.0, 0.0, 240.0, 24.0)).to_vec();
        assert!(approx_eq(frames[1].1.width, 80.0));

        assert_eq!(strip.button(a).unwrap().cell().position(), TabPosition::Leading);
        assert_eq!(strip.button(b).unwrap().cell().position(), TabPosition::Middle);
        assert_eq!(strip.button(c).unwrap().cell().position(), TabPosition::Trailing);
    }

    #[test]
    fn test_strip_margins_and_fixed_width() {
        let s: Rc<dyn Style> = Rc::new(
            DefaultStyle::new(Theme::default_theme(), Rc::new(FixedMeasure))
                .with_tab_button_width(TabWidth::Fixed(100.0))
                .with_margins(12.0, 4.0),
        );
        let mut strip = TabStrip::new(s);
        strip.push(TabButtonBuilder::new("A")).unwrap();
        let b = strip.push(TabButtonBuilder::new("B")).unwrap();
        strip.layout(Rect::new(0.0, 30.0, 500.0, 24.0));
        assert_eq!(strip.frame_of(b), Some(Rect::new(112.0, 30.0, 100.0, 24.0)));
    }

    #[test]
    fn test_strip_applies_style_offset() {
        let s: Rc<dyn Style> = Rc::new(ChromeStyle::new(Rc::new(FixedMeasure)));
        let mut strip = TabStrip::new(s);
        let a = strip.push(TabButtonBuilder::new("A")).unwrap();
        let b = strip.push(TabButtonBuilder::new("B")).unwrap();
        strip.layout(Rect::new(0.0, 0.0, 600.0, 24.0));
        strip.select(a).unwrap();
        assert!(approx_eq(strip.frame_of(a).unwrap().y, 0.0));
        assert!(approx_eq(strip.frame_of(b).unwrap().y, 1.0));
    }

    #[test]
    fn test_strip_select_is_exclusive_and_gated() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A").item(10)).unwrap();
        let b = strip.push(TabButtonBuilder::new("B").item(20)).unwrap();
        let off = strip.push(TabButtonBuilder::new("Off").disabled(true)).unwrap();

        assert_eq!(
            strip.select(a).unwrap(),
            TabEvent::Selected { button: a, item: Some(10) }
        );
        strip.select(b).unwrap();
        assert_eq!(strip.selected(), Some(b));
        assert!(!strip.button(a).unwrap().cell().is_selected());

        assert_eq!(strip.select(off), Err(TabError::Disabled(off)));
        assert_eq!(strip.selected(), Some(b));
        assert_eq!(strip.select(999), Err(TabError::UnknownButton(999)));
    }

    #[test]
    fn test_click_selects_tab() {
        let mut strip = TabStrip::new(style());
        strip.push(TabButtonBuilder::new("A")).unwrap();
        let b = strip.push(TabButtonBuilder::new("B").item(2)).unwrap();
        strip.layout(Rect::new(0.0, 0.0, 300.0, 24.0));

        let event = strip.click(Vec2::new(200.0, 12.0));
        assert_eq!(event, Some(TabEvent::Selected { button: b, item: Some(2) }));
        assert_eq!(strip.click(Vec2::new(500.0, 12.0)), None);
    }

    #[test]
    fn test_click_on_close_button_reports_owner() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A").item(7).closable(true)).unwrap();
        strip.layout(Rect::new(0.0, 0.0, 300.0, 24.0));

        // Hidden until hovered.
        assert_eq!(
            strip.click(Vec2::new(10.0, 10.0)),
            Some(TabEvent::Selected { button: a, item: Some(7) })
        );

        strip.mouse_moved(Vec2::new(10.0, 10.0), false);
        let close = strip.button(a).unwrap().close_button().unwrap();
        assert_eq!(close.owner(), a);
        assert!(close.is_visible());
        assert!(close.is_hovered());
        assert_eq!(
            strip.click(Vec2::new(10.0, 10.0)),
            Some(TabEvent::Close { button: a, item: Some(7) })
        );
        // Closing is up to the app.
        assert_eq!(strip.len(), 1);

        strip.mouse_moved(Vec2::new(500.0, 10.0), false);
        assert!(!strip.button(a).unwrap().close_button().unwrap().is_visible());
    }

    #[test]
    fn test_close_button_stays_hidden_while_dragging_pointer() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A").closable(true)).unwrap();
        strip.layout(Rect::new(0.0, 0.0, 300.0, 24.0));
        strip.mouse_moved(Vec2::new(10.0, 10.0), true);
        assert!(!strip.button(a).unwrap().close_button().unwrap().is_visible());
    }

    #[test]
    fn test_click_on_popup_requests_menu() {
        let mut strip = TabStrip::new(style());
        let a = strip
            .push(TabButtonBuilder::new("A").menu(vec!["Rename".into(), "Close".into()]))
            .unwrap();
        strip.layout(Rect::new(0.0, 0.0, 150.0, 24.0));
        // popup at x 134..142, y 9..15
        let event = strip.click(Vec2::new(138.0, 12.0));
        assert_eq!(
            event,
            Some(TabEvent::MenuRequested {
                button: a,
                item: None,
                anchor: Vec2::new(138.0, 15.0)
            })
        );
    }

    #[test]
    fn test_set_style_repoints_every_button() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A")).unwrap();
        let b = strip.push(TabButtonBuilder::new("B")).unwrap();
        let replacement = style();
        strip.set_style(Rc::clone(&replacement));
        for id in [a, b] {
            assert!(Rc::ptr_eq(strip.button(id).unwrap().style(), &replacement));
        }
        assert_eq!(strip.dirty(), vec![a, b]);
    }

    #[test]
    fn test_remove_and_move() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A")).unwrap();
        let b = strip.push(TabButtonBuilder::new("B")).unwrap();
        let c = strip.insert(0, TabButtonBuilder::new("C")).unwrap();
        assert_eq!(strip.ids(), &[c, a, b]);

        strip.move_button(c, 10).unwrap();
        assert_eq!(strip.ids(), &[a, b, c]);

        assert_eq!(strip.remove(b).unwrap().title(), "B");
        assert_eq!(strip.ids(), &[a, c]);
        assert!(matches!(strip.remove(b), Err(TabError::UnknownButton(_))));
        strip.layout(Rect::new(0.0, 0.0, 300.0, 24.0));
        assert_eq!(strip.button(c).unwrap().cell().position(), TabPosition::Trailing);
    }

    #[test]
    fn test_set_dragging_through_strip() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A")).unwrap();
        strip.set_dragging(a, true).unwrap();
        assert!(strip.button(a).unwrap().cell().is_dragging());
        assert_eq!(strip.set_dragging(42, true), Err(TabError::UnknownButton(42)));
    }

    #[test]
    fn test_edit_title_needs_layout() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("Sheet 1").editable(true)).unwrap();
        let mut editor = MockEditor::default();

        assert!(matches!(
            strip.edit_title(a, &mut editor),
            Err(TabError::NotLaidOut(id)) if id == a
        ));
        assert!(matches!(
            strip.edit_title(99, &mut editor),
            Err(TabError::UnknownButton(99))
        ));
        assert_eq!(editor.frame, None);
        assert_eq!(strip.button(a).unwrap().title(), "Sheet 1");

        strip.layout(Rect::new(0.0, 0.0, 300.0, 24.0));
        let session = strip.edit_title(a, &mut editor).unwrap();
        session.cancel();
        assert!(editor.frame.is_some());
    }

    #[test]
    fn test_single_tab_is_both_ends() {
        let mut strip = TabStrip::new(style());
        let a = strip.push(TabButtonBuilder::new("A")).unwrap();
        strip.layout(Rect::new(0.0, 0.0, 300.0, 24.0));
        let position = strip.button(a).unwrap().cell().position();
        assert_eq!(position, TabPosition::Only);
        assert!(position.is_leading() && position.is_trailing());
    }

    #[test]
    fn test_edit_title_through_strip() {
        let mut strip = TabStrip::new(style());
        let a = strip
            .push(TabButtonBuilder::new("Sheet 1").item(3).editable(true))
            .unwrap();
        strip.layout(Rect::new(0.0, 0.0, 300.0, 24.0));
        let mut editor = MockEditor::default();

        let mut session = strip.edit_title(a, &mut editor).unwrap();
        session.editor().set_string("Budget");
        let outcome = session.commit();

        assert_eq!(
            strip.title_edited(a, &outcome),
            Some(TabEvent::TitleEdited {
                button: a,
                item: Some(3),
                title: "Budget".into()
            })
        );
        assert_eq!(strip.button(a).unwrap().title(), "Budget");

        let session = strip.edit_title(a, &mut editor).unwrap();
        let outcome = session.cancel();
        assert_eq!(strip.title_edited(a, &outcome), None);
    }

    // ──────────────────────────────────────────
    // Drawing
    // ──────────────────────────────────────────

    #[test]
    fn test_strip_draws_bar_then_tabs() {
        let mut strip = TabStrip::new(style());
        strip.push(TabButtonBuilder::new("Alpha")).unwrap();
        strip.push(TabButtonBuilder::new("Beta")).unwrap();
        let bar = Rect::new(0.0, 0.0, 300.0, 24.0);
        strip.layout(bar);

        let mut surface = RecordingSurface::new();
        strip.draw(&mut surface, &BundledAssets);

        assert_eq!(
            surface.commands()[0],
            DrawCommand::Fill {
                rect: bar,
                color: Theme::default_theme().tabs_control.background_color
            }
        );
        assert_eq!(surface.texts(), vec!["Alpha", "Beta"]);
        assert!(strip.dirty().is_empty());
    }

    #[test]
    fn test_alternative_icon_replaces_title_when_cramped() {
        let alt = Image::named("doc", Size::new(16.0, 16.0));
        let mut button = TabButtonBuilder::new("Document.txt")
            .style(style())
            .alternative_title_icon(alt.clone())
            .build(1)
            .unwrap();
        let bounds = Rect::new(0.0, 0.0, 40.0, 24.0);
        button.update_visuals(bounds);

        let mut surface = RecordingSurface::new();
        button.draw(&mut surface, bounds, &BundledAssets);
        assert!(surface.texts().is_empty());
        assert!(surface.commands().contains(&DrawCommand::Image {
            image: alt,
            rect: Rect::new(13.0, 5.0, 14.0, 14.0)
        }));
    }

    #[test]
    fn test_title_drawn_when_cramped_without_alternative_icon() {
        let mut button = TabButtonBuilder::new("Document.txt")
            .style(style())
            .build(1)
            .unwrap();
        let bounds = Rect::new(0.0, 0.0, 60.0, 24.0);
        button.update_visuals(bounds);
        let mut surface = RecordingSurface::new();
        button.draw(&mut surface, bounds, &BundledAssets);
        assert_eq!(surface.texts(), vec!["Document.txt"]);
    }

    #[test]
    fn test_popup_and_close_glyphs_are_tinted() {
        let mut button = TabButtonBuilder::new("Doc")
            .style(style())
            .closable(true)
            .menu(vec!["x".into()])
            .build(1)
            .unwrap();
        button.update_visuals(TAB);
        button.mouse_entered(false);

        let mut surface = RecordingSurface::new();
        button.draw(&mut surface, TAB, &BundledAssets);
        let images: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { image, rect } => Some((image.clone(), *rect)),
                _ => None,
            })
            .collect();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].0.source, ImageSource::Bundled(Asset::PullDown));
        assert_eq!(images[0].0.tint, Some(Color::DARK_GRAY));
        assert_eq!(images[1].0.source, ImageSource::Bundled(Asset::Close));
        assert_eq!(images[1].0.tint, Some(Theme::default_theme().tab_button.title_color));
        assert_eq!(images[1].1, Rect::new(5.0, 5.0, 14.0, 14.0));
    }

    #[test]
    fn test_editing_cell_draws_no_title() {
        let mut c = cell("Doc");
        c.set_editable(true);
        c.begin_edit().unwrap();
        let mut surface = RecordingSurface::new();
        c.draw(&mut surface, TAB, &BundledAssets);
        assert!(surface.texts().is_empty());
    }
}
