use super::types::Slot;

pub const REMINDER_TEMPLATES: [&str; 7] = [
    "Oi! {}! It's ya turn!",
    "Please make your move, {}.",
    "If {} is happy and they know it, they'll make their move!",
    "{}, friendly reminder that it's your turn.",
    "Do you think {} is always this slow?",
    "Waiting for {} to make their move is like watching grass grow.",
    "Maybe watching paint dry is faster than {} making their move.",
];

pub fn reminder(template: &str, player: &str) -> String {
    template.replace("{}", player)
}

pub fn welcome() -> String {
    "~~~~ Welcome to Connect 4! ~~~~\nPlayer 1, please select /p1\nPlayer 2, please select /p2"
        .to_string()
}

pub fn still_needs_player(slot: Slot) -> String {
    format!(
        "{} still needs to be set. Use /p{} to do so.",
        slot,
        slot.number()
    )
}

pub fn already_started() -> String {
    "The game has already started silly goose!".to_string()
}

pub fn player_set(name: &str, slot: Slot) -> String {
    format!("{} has been set as {}.", name, slot)
}

pub fn already_player(name: &str, slot: Slot) -> String {
    format!("{} is already {}!", name, slot)
}

pub fn games_begin() -> String {
    "Let the games begin!".to_string()
}

pub fn turn(name: &str, board: &str) -> String {
    format!("{}'s turn!\n{}", name, board)
}

pub fn not_your_turn(current: &str, board: &str) -> String {
    format!("It's not your turn! It's {}'s turn.\n{}", current, board)
}

pub fn try_again(board: &str) -> String {
    format!("You can't place a chip there! Try again.\n{}", board)
}

pub fn wins(name: &str, board: &str) -> String {
    format!("{} wins!\n{}", name, board)
}

pub fn tie(board: &str) -> String {
    format!("Well... it's a tie... good job... I guess.\n{}", board)
}

pub fn cannot_quit_unstarted() -> String {
    "You can't quit a game that hasn't even started yet...\nUse /start_game to begin setup."
        .to_string()
}

pub fn setup_reset() -> String {
    "Resetting setup.".to_string()
}

pub fn quitter(quitter: &str, winner: &str, board: &str) -> String {
    format!("{} is a quitter! {} wins!\n{}", quitter, winner, board)
}
