// ============================================================================
// CLOCK - Conversión hora local ↔ epoch (zona horaria del navegador)
// ============================================================================

use chrono::{Datelike, NaiveDateTime, Timelike};
use wasm_bindgen::JsValue;

/// Zona horaria del usuario. El navegador es la única fuente fiable,
/// por eso queda detrás de un trait.
pub trait Clock {
    /// Fecha/hora local → milisegundos desde epoch. `None` si no existe.
    fn local_epoch_millis(&self, local: NaiveDateTime) -> Option<i64>;

    /// Segundos desde epoch → texto en formato local
    fn format_local(&self, epoch_seconds: u64) -> String;
}

/// Reloj del navegador (`Date` de JS en hora local)
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn local_epoch_millis(&self, local: NaiveDateTime) -> Option<i64> {
        let year = js_date_year(&local)?;
        let date = js_sys::Date::new_with_year_month_day_hr_min_sec_milli(
            year,
            local.month0() as i32,
            local.day() as i32,
            local.hour() as i32,
            local.minute() as i32,
            local.second() as i32,
            (local.nanosecond() / 1_000_000) as i32,
        );
        let millis = date.get_time();
        if millis.is_nan() {
            None
        } else {
            Some(millis as i64)
        }
    }

    fn format_local(&self, epoch_seconds: u64) -> String {
        let date = js_sys::Date::new(&JsValue::from_f64(epoch_seconds as f64 * 1000.0));
        date.to_locale_string("default", &JsValue::UNDEFINED).into()
    }
}

/// Año para el constructor de `Date`. JS interpreta 0..=99 como 1900..=1999,
/// así que esos años (anteriores a epoch de todos modos) no se aceptan.
fn js_date_year(local: &NaiveDateTime) -> Option<u32> {
    u32::try_from(local.year()).ok().filter(|year| *year >= 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_year(year: i32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    #[test]
    fn two_digit_years_are_not_handed_to_js_date() {
        assert_eq!(js_date_year(&at_year(99)), None);
        assert_eq!(js_date_year(&at_year(0)), None);
        assert_eq!(js_date_year(&at_year(-5)), None);
    }

    #[test]
    fn four_digit_years_pass_through() {
        assert_eq!(js_date_year(&at_year(100)), Some(100));
        assert_eq!(js_date_year(&at_year(2026)), Some(2026));
    }
}
