//! Integration tests for appgenie.
//!
//! These tests exercise the public API from outside the crate: forms on a
//! headless surface, the screens, and the controller round trip.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use appgenie::clock::FixedClock;
use appgenie::config::{AppConfig, FormConfig};
use appgenie::controller::Controller;
use appgenie::form::{Form, FormEvent};
use appgenie::geometry::Size;
use appgenie::screens::{AddContact, CreateBooking, View};
use appgenie::style::{FontDescriptor, FontFamily, Slant, Weight};
use appgenie::surface::HeadlessSurface;
use appgenie::testing::{form_to_string, headless_form, Pilot};
use appgenie::validate::{enforce_email, enforce_int_tuple, enforce_string, Value};
use appgenie::widgets::*;
use appgenie::{ErrorKind, FormError};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn new_form() -> Form {
    headless_form(FormConfig::default()).unwrap()
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[test]
fn test_default_form_then_widen() {
    let mut form = new_form();
    assert_eq!(form.title(), "new_view");
    assert_eq!(form.size().as_tuple(), (300, 400));

    form.set_width(800).unwrap();
    assert_eq!(form.size().as_tuple(), (800, 400));
    let surface = form.surface_as::<HeadlessSurface>().unwrap();
    assert_eq!(surface.geometry_string(), "800x400");
    assert_eq!(surface.region(form.content()).unwrap().size(), Size::new(800, 400));
}

#[test]
fn test_set_size_round_trips_for_many_sizes() {
    let mut form = new_form();
    for (w, h) in [(1, 1), (120, 80), (640, 480), (1920, 1080)] {
        form.set_size((w, h)).unwrap();
        assert_eq!((form.width(), form.height()), (w, h));
        assert_eq!(form.size(), Size::new(w, h));
        form.set_width(w + 7).unwrap();
        assert_eq!(form.size(), Size::new(w + 7, h));
    }
}

#[test]
fn test_dynamic_geometry_properties() {
    let mut form = new_form();
    form.set_property("size", Value::Tuple(vec![Value::Int(500), Value::Int(250)])).unwrap();
    assert_eq!(form.size(), Size::new(500, 250));
    let err = form.set_property("size", Value::Tuple(vec![Value::Int(500)])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(form.set_property("width", 2.5).unwrap_err().kind(), ErrorKind::Type);
}

// ---------------------------------------------------------------------------
// Registry and factory
// ---------------------------------------------------------------------------

#[test]
fn test_component_lookup_rules() {
    let mut form = new_form();
    let first = form.create_button(ButtonConfig::new("btn", 0, 0, "First")).unwrap();
    form.create_button(ButtonConfig::new("btn", 0, 30, "Second")).unwrap();

    assert_eq!(form.component_id("btn").unwrap(), Some(first));
    assert!(form.component("nothing").unwrap().is_none());
    assert_eq!(form.component("   ").unwrap_err(), FormError::EmptyString("name".into()));
    assert_eq!(form.component(Value::Null).unwrap_err(), FormError::NullValue("name".into()));
    assert_eq!(form.component(3).unwrap_err().kind(), ErrorKind::Type);
}

#[test]
fn test_text_entry_width_threshold() {
    let mut form = new_form();
    for width in -2..30 {
        let result = form.create_text_entry(TextEntryConfig::new(format!("txt_{width}"), 0, 0, width));
        if width < MIN_ENTRY_WIDTH {
            assert!(matches!(result, Err(FormError::ValueOutOfRange { .. })), "width {width}");
        } else {
            assert!(result.is_ok(), "width {width}");
        }
    }
    assert_eq!(form.registry().len(), (30 - MIN_ENTRY_WIDTH) as usize);
}

#[test]
fn test_default_dropdown_and_spinner_bounds() {
    let mut form = new_form();
    form.create_dropdown(DropdownConfig::default()).unwrap();
    let dropdown = form.component("dropdown").unwrap().unwrap().as_dropdown().unwrap();
    assert_eq!(dropdown.values(), ["Option 1", "Option 2", "Option 3"]);
    assert_eq!(dropdown.selected(), "");

    form.create_spinner(SpinnerConfig::new("hour", 0, 0, 3).with_range(0, 23, 1)).unwrap();
    let hour = form.component_mut("hour").unwrap().unwrap().as_spinner_mut().unwrap();
    assert!(hour.set_value(24).is_err());
    assert!(hour.set_value(23).is_ok());
}

#[test]
fn test_failed_creation_leaves_no_trace() {
    let mut form = new_form();
    let before = form_to_string(&form);
    assert!(form.create_spinner(SpinnerConfig::default().with_range(5, 1, 1)).is_err());
    assert!(form.create_dropdown(DropdownConfig::default().with_values(Vec::<String>::new())).is_err());
    assert!(form.create_label(LabelConfig::new("lbl", 0, -1, "x")).is_err());
    assert_eq!(form_to_string(&form), before);
    assert_eq!(form.surface_as::<HeadlessSurface>().unwrap().placed_count(), 1);
}

// ---------------------------------------------------------------------------
// Fonts
// ---------------------------------------------------------------------------

#[test]
fn test_font_padding_idempotence_and_order() {
    let mut form = new_form();
    form.create_label(LabelConfig::new("lbl", 0, 0, "Heading")).unwrap();

    let short = *form.apply_font("lbl", "Helvetica", 12, &["bold"]).unwrap().font().unwrap();
    let long = *form.apply_font("lbl", "Helvetica", 12, &["bold", "roman", "no_underline"]).unwrap().font().unwrap();
    let again = *form.apply_font("lbl", "Helvetica", 12, &["bold", "roman", "no_underline"]).unwrap().font().unwrap();
    assert_eq!(short, long);
    assert_eq!(long, again);
    assert_eq!(
        long,
        FontDescriptor {
            family: FontFamily::Helvetica,
            size: 12,
            weight: Weight::Bold,
            slant: Slant::Roman,
            underlined: false,
        }
    );

    let swapped = form.apply_font("lbl", "Helvetica", 12, &["roman", "bold", "no_underline"]);
    assert!(matches!(swapped, Err(FormError::InvalidStyle { .. })));
    assert_eq!(
        form.apply_font("missing_name", "Arial", 10, &[]).unwrap_err(),
        FormError::UnknownComponent("missing_name".into())
    );
}

// ---------------------------------------------------------------------------
// Validation contract
// ---------------------------------------------------------------------------

#[test]
fn test_contract_from_the_outside() {
    assert_eq!(enforce_string(&"ok".into(), "title").unwrap(), "ok");
    assert_eq!(enforce_string(&Value::Null, "title").unwrap_err(), FormError::NullValue("title".into()));
    assert_eq!(enforce_int_tuple(&(3, 4).into(), "size").unwrap(), vec![3, 4]);
    assert!(enforce_email("someone@example.com", "email").is_ok());
    assert!(enforce_email("someone@example", "email").is_err());
    assert!(enforce_email("some.one@example.", "email").is_err());
}

// ---------------------------------------------------------------------------
// Screens and controller
// ---------------------------------------------------------------------------

fn type_into(form: &mut Form, name: &str, text: &str) {
    let widget = form.component_mut(name).unwrap().unwrap();
    widget.as_entry_mut().unwrap().set_text(text);
}

#[test]
fn test_login_submit_is_routed_to_controller() {
    let mut controller = Controller::new(AppConfig::default()).unwrap();
    let mut login = controller.login_view(HeadlessSurface::new(), FixedClock::on(day())).unwrap();

    type_into(login.form_mut(), "txt_username", "new_user");
    type_into(login.form_mut(), "txt_password", "wrong");
    login.activate("btn_submit").unwrap();
    assert_eq!(controller.pump(&mut login).unwrap(), Some(false));

    type_into(login.form_mut(), "txt_password", "password");
    login.activate("btn_submit").unwrap();
    assert_eq!(controller.pump(&mut login).unwrap(), Some(true));
}

#[test]
fn test_add_contact_then_book_it() {
    let mut controller = Controller::new(AppConfig::default()).unwrap();

    let mut add = controller.add_contact_view(HeadlessSurface::new(), FixedClock::on(day())).unwrap();
    type_into(add.form_mut(), "txt_contact_name", "Grace Hopper");
    type_into(add.form_mut(), "txt_contact_email", "grace@navy.mil");
    add.activate("btn_submit").unwrap();
    assert_eq!(add.form_mut().drain_events(), vec![FormEvent::Activated { name: "btn_submit".into() }]);
    controller.handle_add_contact(&add.submit()).unwrap();
    add.activate("btn_clear").unwrap();
    assert_eq!(add.submit(), vec![String::new(), String::new()]);

    let mut booking_view = controller.create_booking_view(HeadlessSurface::new(), FixedClock::on(day())).unwrap();
    {
        let form = booking_view.form_mut();
        form.component_mut("cmb_contact").unwrap().unwrap().as_dropdown_mut().unwrap().select("Grace Hopper").unwrap();
        form.component_mut("spinbox_hour").unwrap().unwrap().as_spinner_mut().unwrap().set_value(9).unwrap();
        form.component_mut("spinbox_minute").unwrap().unwrap().as_spinner_mut().unwrap().set_value(15).unwrap();
    }
    let booking = controller.handle_create_booking(&booking_view.submit()).unwrap();
    assert_eq!(
        booking.to_string(),
        "Booking(title='New Booking', date=2026-10-18, time=09:15, contact='Grace Hopper', description='Enter a description.')"
    );
}

#[test]
fn test_pilot_keyboard_session() {
    let mut pilot = Pilot::new(FormConfig::new().with_title("Quick Contact").with_size(420, 200)).unwrap();
    {
        let form = pilot.form_mut();
        form.create_label(LabelConfig::new("lbl_name", 20, 20, "Name:")).unwrap();
        form.create_text_entry(TextEntryConfig::new("txt_name", 120, 20, 20)).unwrap();
        form.create_text_entry(TextEntryConfig::new("txt_pin", 120, 60, 12).masked(true)).unwrap();
        form.create_button(ButtonConfig::new("btn_ok", 120, 100, "OK")).unwrap();
    }
    pilot.tab();
    pilot.type_text("Ada").unwrap();
    pilot.tab();
    pilot.type_text("1234").unwrap();
    pilot.tab();
    pilot.enter().unwrap();

    assert_eq!(pilot.events(), vec![FormEvent::Activated { name: "btn_ok".into() }]);
    insta::assert_snapshot!(pilot.dump(), @r#"
    Form "Quick Contact" 420x200
      Label lbl_name @ (20, 20) "Name:" [Arial 9 normal roman no_underline]
      TextEntry txt_name @ (120, 20) width=20 "Ada" [Arial 9 normal roman no_underline]
      TextEntry txt_pin @ (120, 60) width=12 "****" [Arial 9 normal roman no_underline]
      Button btn_ok @ (120, 100) "OK" [Arial 9 normal roman no_underline]
    "#);
}

#[test]
fn test_screens_build_on_any_surface() {
    let add = AddContact::new(HeadlessSurface::new(), FixedClock::on(day())).unwrap();
    assert_eq!(add.form().size(), Size::new(420, 400));
    let booking = CreateBooking::new(HeadlessSurface::new(), FixedClock::on(day())).unwrap();
    assert_eq!(booking.form().title(), "Create Booking");
    assert_eq!(booking.form().registry().len(), 10);
}
