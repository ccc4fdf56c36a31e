use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

static BAR_WIDTH: OnceLock<u32> = OnceLock::new();

pub(crate) fn bar_width() -> u32 {
    *BAR_WIDTH.get_or_init(|| parse_env_u32("RM4_BAR_WIDTH", 4).clamp(1, 64))
}

static BAR_GAP: OnceLock<u32> = OnceLock::new();

pub(crate) fn bar_gap() -> u32 {
    *BAR_GAP.get_or_init(|| parse_env_u32("RM4_BAR_GAP", 3).min(64))
}

static ROW_HEIGHT: OnceLock<u32> = OnceLock::new();

pub(crate) fn row_height() -> u32 {
    *ROW_HEIGHT.get_or_init(|| parse_env_u32("RM4_ROW_HEIGHT", 8).clamp(1, 128))
}

static QUIET_ZONE: OnceLock<u32> = OnceLock::new();

pub(crate) fn quiet_zone() -> u32 {
    *QUIET_ZONE.get_or_init(|| parse_env_u32("RM4_QUIET_ZONE", 8).min(256))
}
