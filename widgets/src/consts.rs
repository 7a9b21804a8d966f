//! Shared constants: validation limits, cosmetic delays, and URLs.

/// Number of steps in the signup wizard, including the completion step.
pub const TOTAL_STEPS: u8 = 5;

/// Minimum username length after trimming.
pub const USERNAME_MIN_LEN: usize = 4;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Default minimum full-name length when the rule is enabled.
pub const NAME_MIN_LEN: usize = 2;

/// Default inclusive lower age bound.
pub const AGE_MIN: u32 = 18;

/// Default inclusive upper age bound.
pub const AGE_MAX: u32 = 100;

/// Passwords containing any of these (case-insensitive) are rejected.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "12345678",
    "123456789",
    "qwerty123",
    "abcdefgh",
    "password1",
    "password123",
    "11111111",
    "00000000",
    "aaaaaaaa",
    "qwertyui",
    "asdfghjk",
    "zxcvbnm123",
    "1qaz2wsx",
    "qwer1234",
    "admin123",
    "test1234",
    "user1234",
    "welcome123",
];

/// Where the completion step's terminal action sends the user.
pub const LOGIN_URL: &str = "/accounts/login/";

/// Blocking confirmation shown before the signup form is submitted.
pub const SUBMIT_CONFIRM_MESSAGE: &str = "입력하신 정보로 회원가입을 진행하시겠습니까?";

/// Main carousel autoplay interval.
pub const CAROUSEL_INTERVAL_MS: u32 = 4000;

/// Product slider step width in pixels.
pub const SLIDER_WIDTH_PX: i32 = 235;

/// Highest product slider index.
pub const SLIDER_MAX_INDEX: usize = 1;

/// Delay before the navigation dropdown closes after the pointer leaves.
pub const MENU_CLOSE_DELAY_MS: u32 = 200;

/// Floating notices dismiss themselves after this delay.
pub const NOTICE_DISMISS_MS: u32 = 3000;

/// Submit buttons are re-enabled after this delay if no navigation happened.
pub const BUTTON_RESTORE_MS: u32 = 3000;

/// Field tooltips hide themselves after this delay.
pub const TOOLTIP_DISMISS_MS: u32 = 3000;
