//! Cross-check the factor tables against uom's SI definitions.

use uc_core::{Category, Tolerances, nearly_equal};
use uc_units::{LENGTH, MASS, VOLUME, convert_value};
use uom::si::f64::{Length, Mass, ThermodynamicTemperature, Volume};
use uom::si::{length, mass, thermodynamic_temperature as temp, volume};

// uom rounds some customary definitions to 7 significant digits
const TOL: Tolerances = Tolerances::new(1e-12, 1e-6);

fn assert_close(ours: f64, theirs: f64, what: &str) {
    assert!(
        nearly_equal(ours, theirs, TOL),
        "{what}: table gives {ours}, uom gives {theirs}"
    );
}

#[test]
fn length_factors_match_uom() {
    let expected = [
        ("km", Length::new::<length::kilometer>(1.0)),
        ("m", Length::new::<length::meter>(1.0)),
        ("cm", Length::new::<length::centimeter>(1.0)),
        ("mm", Length::new::<length::millimeter>(1.0)),
        ("in", Length::new::<length::inch>(1.0)),
        ("ft", Length::new::<length::foot>(1.0)),
        ("yd", Length::new::<length::yard>(1.0)),
        ("mi", Length::new::<length::mile>(1.0)),
    ];
    assert_eq!(expected.len(), LENGTH.len());
    for (unit, quantity) in expected {
        let factor = LENGTH.factor(unit).unwrap();
        assert_close(factor, quantity.get::<length::meter>(), unit);
    }
}

#[test]
fn mass_factors_match_uom() {
    let expected = [
        ("t (metric tonne)", Mass::new::<mass::ton>(1.0)),
        ("kg", Mass::new::<mass::kilogram>(1.0)),
        ("g", Mass::new::<mass::gram>(1.0)),
        ("mg", Mass::new::<mass::milligram>(1.0)),
        ("lb", Mass::new::<mass::pound>(1.0)),
        ("oz", Mass::new::<mass::ounce>(1.0)),
    ];
    assert_eq!(expected.len(), MASS.len());
    for (unit, quantity) in expected {
        let factor = MASS.factor(unit).unwrap();
        assert_close(factor, quantity.get::<mass::kilogram>(), unit);
    }
}

#[test]
fn volume_factors_match_uom() {
    let expected = [
        ("L", Volume::new::<volume::liter>(1.0)),
        ("mL", Volume::new::<volume::milliliter>(1.0)),
        ("gal_us", Volume::new::<volume::gallon>(1.0)),
        ("qt_us", Volume::new::<volume::quart_liquid>(1.0)),
        ("pt_us", Volume::new::<volume::pint_liquid>(1.0)),
        ("cup_us", Volume::new::<volume::cup>(1.0)),
        ("fl_oz_us", Volume::new::<volume::fluid_ounce>(1.0)),
    ];
    assert_eq!(expected.len(), VOLUME.len());
    for (unit, quantity) in expected {
        let factor = VOLUME.factor(unit).unwrap();
        assert_close(factor, quantity.get::<volume::liter>(), unit);
    }
}

#[test]
fn temperature_matches_uom() {
    for celsius in [-40.0, 0.0, 37.0, 100.0] {
        let t = ThermodynamicTemperature::new::<temp::degree_celsius>(celsius);

        let f = convert_value(Category::Temperature, "Celsius", "Fahrenheit", celsius).unwrap();
        assert_close(f, t.get::<temp::degree_fahrenheit>(), "Fahrenheit");

        let k = convert_value(Category::Temperature, "Celsius", "Kelvin", celsius).unwrap();
        assert_close(k, t.get::<temp::kelvin>(), "Kelvin");
    }
}
