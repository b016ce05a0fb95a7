pub const REFERENCE_WIDTH: i32 = 1080;        // Width the layout was tuned for
pub const REFERENCE_HEIGHT: i32 = 1920;       // Height the layout was tuned for
pub const FPS: u32 = 60;                      // Frames per second

pub const WINDOW_TITLE: &str = "Interactive Christmas Present";
pub const DEFAULT_PHOTOS: [&str; 3] = ["photo1.jpg", "photo2.jpg", "photo3.jpg"];
pub const DEFAULT_MUSIC: &str = "music.mp3";
pub const DEFAULT_VOLUME: f32 = 0.3;          // 30% of max

// Photo scene budget, in reference pixels
pub const PHOTO_MARGIN_X: f32 = 100.0;
pub const PHOTO_MARGIN_Y: f32 = 300.0;
pub const PHOTO_LIFT: f32 = 100.0;            // Photo is shifted up to leave room for captions

// Gift scene stroke widths, in reference pixels
pub const BOX_BORDER: f32 = 8.0;
pub const RIBBON_WIDTH: f32 = 15.0;
pub const BOW_RADIUS: f32 = 60.0;
pub const BOW_OUTLINE: f32 = 3.0;

// Font sizes, in reference pixels
pub const TITLE_FONT: f32 = 48.0;
pub const SUBTITLE_FONT: f32 = 32.0;
pub const COUNTER_FONT: f32 = 28.0;
pub const PROMPT_FONT: f32 = 32.0;
pub const FAREWELL_FONT: f32 = 36.0;
