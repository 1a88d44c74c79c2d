//! AP style abbreviations for U.S. states and territories.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::value::value_to_text;

/// A state or territory and its identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub name: &'static str,
    pub postal: &'static str,
    pub fips: &'static str,
    /// Associated Press style abbreviation
    pub ap: &'static str,
}

const fn state(
    name: &'static str,
    postal: &'static str,
    fips: &'static str,
    ap: &'static str,
) -> State {
    State {
        name,
        postal,
        fips,
        ap,
    }
}

pub const STATES: &[State] = &[
    state("Alabama", "AL", "01", "Ala."),
    state("Alaska", "AK", "02", "Alaska"),
    state("Arizona", "AZ", "04", "Ariz."),
    state("Arkansas", "AR", "05", "Ark."),
    state("California", "CA", "06", "Calif."),
    state("Colorado", "CO", "08", "Colo."),
    state("Connecticut", "CT", "09", "Conn."),
    state("Delaware", "DE", "10", "Del."),
    state("District of Columbia", "DC", "11", "D.C."),
    state("Florida", "FL", "12", "Fla."),
    state("Georgia", "GA", "13", "Ga."),
    state("Hawaii", "HI", "15", "Hawaii"),
    state("Idaho", "ID", "16", "Idaho"),
    state("Illinois", "IL", "17", "Ill."),
    state("Indiana", "IN", "18", "Ind."),
    state("Iowa", "IA", "19", "Iowa"),
    state("Kansas", "KS", "20", "Kan."),
    state("Kentucky", "KY", "21", "Ky."),
    state("Louisiana", "LA", "22", "La."),
    state("Maine", "ME", "23", "Maine"),
    state("Maryland", "MD", "24", "Md."),
    state("Massachusetts", "MA", "25", "Mass."),
    state("Michigan", "MI", "26", "Mich."),
    state("Minnesota", "MN", "27", "Minn."),
    state("Mississippi", "MS", "28", "Miss."),
    state("Missouri", "MO", "29", "Mo."),
    state("Montana", "MT", "30", "Mont."),
    state("Nebraska", "NE", "31", "Neb."),
    state("Nevada", "NV", "32", "Nev."),
    state("New Hampshire", "NH", "33", "N.H."),
    state("New Jersey", "NJ", "34", "N.J."),
    state("New Mexico", "NM", "35", "N.M."),
    state("New York", "NY", "36", "N.Y."),
    state("North Carolina", "NC", "37", "N.C."),
    state("North Dakota", "ND", "38", "N.D."),
    state("Ohio", "OH", "39", "Ohio"),
    state("Oklahoma", "OK", "40", "Okla."),
    state("Oregon", "OR", "41", "Ore."),
    state("Pennsylvania", "PA", "42", "Pa."),
    state("Rhode Island", "RI", "44", "R.I."),
    state("South Carolina", "SC", "45", "S.C."),
    state("South Dakota", "SD", "46", "S.D."),
    state("Tennessee", "TN", "47", "Tenn."),
    state("Texas", "TX", "48", "Texas"),
    state("Utah", "UT", "49", "Utah"),
    state("Vermont", "VT", "50", "Vt."),
    state("Virginia", "VA", "51", "Va."),
    state("Washington", "WA", "53", "Wash."),
    state("West Virginia", "WV", "54", "W.Va."),
    state("Wisconsin", "WI", "55", "Wis."),
    state("Wyoming", "WY", "56", "Wyo."),
    state("Guam", "GU", "66", "Guam"),
    state("Puerto Rico", "PR", "72", "P.R."),
    state("Virgin Islands", "VI", "78", "V.I."),
];

static INDEX: Lazy<HashMap<String, &'static State>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(STATES.len() * 4);
    for s in STATES {
        index.insert(s.name.to_lowercase(), s);
        index.insert(s.postal.to_lowercase(), s);
        index.insert(s.ap.to_lowercase(), s);
        index.insert(s.fips.to_string(), s);
    }
    index
});

fn lookup_key(text: &str) -> String {
    let key = text.trim().to_lowercase();
    if key.len() == 1 && key.bytes().all(|b| b.is_ascii_digit()) {
        format!("0{}", key)
    } else {
        key
    }
}

/// Find a state by name, postal code, AP abbreviation or FIPS code.
pub fn lookup(text: &str) -> Option<&'static State> {
    INDEX.get(&lookup_key(text)).copied()
}

/// Convert a state name or postal code to its AP abbreviation.
///
/// `"California"` and `"ca"` both give `"Calif."`. Anything unknown comes
/// back unchanged.
pub fn ap_state(value: &Value) -> String {
    let text = value_to_text(value);
    match lookup(&text) {
        Some(state) => state.ap.to_string(),
        None => text,
    }
}
