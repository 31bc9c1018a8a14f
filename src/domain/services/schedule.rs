use rand::Rng;

pub const SESSION_TIMES: [&str; 4] = ["09:00", "11:00", "14:00", "16:00"];

/// Morning people may get any slot; everyone else gets an afternoon one.
pub fn suggest_session_time(preference: &str) -> &'static str {
    suggest_session_time_with(preference, &mut rand::thread_rng())
}

pub fn suggest_session_time_with<R: Rng + ?Sized>(preference: &str, rng: &mut R) -> &'static str {
    let options: &[&'static str] = if preference.to_lowercase().contains("morning") {
        &SESSION_TIMES
    } else {
        &SESSION_TIMES[2..]
    };
    options[rng.gen_range(0..options.len())]
}
