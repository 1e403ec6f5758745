pub mod game;

#[macro_export]
macro_rules! expose_game{($mod:tt::$game:tt) => {
    mod $mod;

    pub use self::$mod::{NAME, INITIAL_SIZE};
    use self::$mod::$game;

    pub fn create_game() -> $game {
        $game::new()
    }
}}
