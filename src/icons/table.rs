//! Glyphs offered by the picker, with their search keywords.
//!
//! The first keyword is the icon label; the rest are synonyms.

use super::IconEntry;
use egui_phosphor::regular as ph;

pub static ICONS: &[IconEntry] = &[
    IconEntry::new(ph::ADDRESS_BOOK, &["address book", "contacts", "people"]),
    IconEntry::new(ph::AIRPLANE, &["airplane", "flight", "travel", "plane"]),
    IconEntry::new(ph::ALARM, &["alarm", "clock", "timer", "wake"]),
    IconEntry::new(ph::ANCHOR, &["anchor", "ship", "marine"]),
    IconEntry::new(ph::ARCHIVE, &["archive", "box", "storage"]),
    IconEntry::new(ph::ARROW_CLOCKWISE, &["arrow clockwise", "refresh", "reload", "redo"]),
    IconEntry::new(ph::ARROW_DOWN, &["arrow down", "south", "descend"]),
    IconEntry::new(ph::ARROW_LEFT, &["arrow left", "back", "previous", "west"]),
    IconEntry::new(ph::ARROW_RIGHT, &["arrow right", "forward", "next", "east"]),
    IconEntry::new(ph::ARROW_UP, &["arrow up", "north", "ascend"]),
    IconEntry::new(ph::AT, &["at", "email", "mention"]),
    IconEntry::new(ph::BELL, &["bell", "notification", "alert", "reminder"]),
    IconEntry::new(ph::BOOK, &["book", "read", "library"]),
    IconEntry::new(ph::BOOKMARK, &["bookmark", "save", "favorite"]),
    IconEntry::new(ph::BRIEFCASE, &["briefcase", "work", "business", "job"]),
    IconEntry::new(ph::BUG, &["bug", "debug", "insect", "error"]),
    IconEntry::new(ph::CALENDAR, &["calendar", "date", "event", "schedule"]),
    IconEntry::new(ph::CAMERA, &["camera", "photo", "picture"]),
    IconEntry::new(ph::CAR, &["car", "vehicle", "drive"]),
    IconEntry::new(ph::CHAT, &["chat", "message", "talk", "comment"]),
    IconEntry::new(ph::CHECK, &["check", "done", "ok", "confirm"]),
    IconEntry::new(ph::CLIPBOARD, &["clipboard", "paste", "copy"]),
    IconEntry::new(ph::CLOCK, &["clock", "time", "history"]),
    IconEntry::new(ph::CLOUD, &["cloud", "weather", "sync"]),
    IconEntry::new(ph::CODE, &["code", "programming", "source", "html"]),
    IconEntry::new(ph::COFFEE, &["coffee", "drink", "break", "cafe"]),
    IconEntry::new(ph::COPY, &["copy", "duplicate", "clone"]),
    IconEntry::new(ph::CROWN, &["crown", "king", "queen", "royal"]),
    IconEntry::new(ph::DATABASE, &["database", "storage", "sql"]),
    IconEntry::new(ph::DOWNLOAD, &["download", "save", "import"]),
    IconEntry::new(ph::ENVELOPE, &["envelope", "mail", "email", "letter"]),
    IconEntry::new(ph::EYE, &["eye", "view", "visible", "show"]),
    IconEntry::new(ph::FILE, &["file", "document", "page"]),
    IconEntry::new(ph::FILE_TEXT, &["file text", "document", "notes"]),
    IconEntry::new(ph::FLAG, &["flag", "report", "mark"]),
    IconEntry::new(ph::FLOPPY_DISK, &["floppy disk", "save", "storage"]),
    IconEntry::new(ph::FOLDER, &["folder", "directory"]),
    IconEntry::new(ph::GEAR, &["gear", "settings", "preferences", "cog"]),
    IconEntry::new(ph::GIFT, &["gift", "present", "birthday"]),
    IconEntry::new(ph::GLOBE, &["globe", "world", "internet", "web"]),
    IconEntry::new(ph::HEART, &["heart", "love", "like", "favorite"]),
    IconEntry::new(ph::HOUSE, &["house", "home", "building"]),
    IconEntry::new(ph::IMAGE, &["image", "picture", "photo"]),
    IconEntry::new(ph::INFO, &["info", "information", "help"]),
    IconEntry::new(ph::KEY, &["key", "password", "unlock"]),
    IconEntry::new(ph::LIGHTBULB, &["lightbulb", "idea", "hint"]),
    IconEntry::new(ph::LINK, &["link", "url", "chain"]),
    IconEntry::new(ph::LIST, &["list", "menu", "items"]),
    IconEntry::new(ph::LOCK, &["lock", "secure", "private", "password"]),
    IconEntry::new(ph::LOCK_OPEN, &["lock open", "unlocked", "public"]),
    IconEntry::new(ph::MAGNIFYING_GLASS, &["magnifying glass", "search", "find", "zoom"]),
    IconEntry::new(ph::MAP_PIN, &["map pin", "location", "place", "marker"]),
    IconEntry::new(ph::MICROPHONE, &["microphone", "record", "voice", "audio"]),
    IconEntry::new(ph::MOON, &["moon", "night", "dark"]),
    IconEntry::new(ph::MUSIC_NOTE, &["music note", "song", "audio"]),
    IconEntry::new(ph::PAPER_PLANE, &["paper plane", "send", "message"]),
    IconEntry::new(ph::PAPERCLIP, &["paperclip", "attachment", "attach"]),
    IconEntry::new(ph::PENCIL, &["pencil", "edit", "write"]),
    IconEntry::new(ph::PHONE, &["phone", "call", "telephone"]),
    IconEntry::new(ph::PLUS, &["plus", "add", "new"]),
    IconEntry::new(ph::PRINTER, &["printer", "print"]),
    IconEntry::new(ph::PUSH_PIN, &["push pin", "pin", "sticky"]),
    IconEntry::new(ph::QUESTION, &["question", "help", "unknown"]),
    IconEntry::new(ph::ROCKET, &["rocket", "launch", "space", "startup"]),
    IconEntry::new(ph::SCISSORS, &["scissors", "cut", "clip"]),
    IconEntry::new(ph::SHARE, &["share", "send", "export"]),
    IconEntry::new(ph::SHIELD, &["shield", "security", "protect"]),
    IconEntry::new(ph::SMILEY, &["smiley", "face", "happy", "emoji"]),
    IconEntry::new(ph::STAR, &["star", "favorite", "rating"]),
    IconEntry::new(ph::SUN, &["sun", "day", "light", "weather"]),
    IconEntry::new(ph::TAG, &["tag", "label", "price"]),
    IconEntry::new(ph::TERMINAL, &["terminal", "console", "shell", "command"]),
    IconEntry::new(ph::THUMBS_UP, &["thumbs up", "like", "approve"]),
    IconEntry::new(ph::TRASH, &["trash", "delete", "remove", "bin"]),
    IconEntry::new(ph::TRUCK, &["truck", "delivery", "shipping"]),
    IconEntry::new(ph::UPLOAD, &["upload", "export", "send"]),
    IconEntry::new(ph::USER, &["user", "person", "account", "profile"]),
    IconEntry::new(ph::USERS, &["users", "people", "group", "team"]),
    IconEntry::new(ph::WARNING, &["warning", "caution", "alert"]),
    IconEntry::new(ph::WRENCH, &["wrench", "tool", "fix", "repair"]),
    IconEntry::new(ph::X, &["x", "close", "cancel", "remove"]),
];
