// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Built-in catalog vocabulary.
//!
//! Occupations, archetypes, genres and character traits as users actually type
//! them, in Russian and English. Terms are written naturally ("учёный") and
//! normalized when the table is built.

pub(crate) const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    // Occupations
    ("хирург", &["доктор", "медик", "врач", "surgeon"]),
    ("доктор", &["врач", "медик", "лекарь", "doctor", "medic"]),
    ("медсестра", &["сиделка", "nurse"]),
    ("детектив", &["сыщик", "следователь", "detective", "investigator"]),
    ("учитель", &["преподаватель", "педагог", "teacher", "tutor"]),
    ("студент", &["ученик", "студентка", "student"]),
    ("учёный", &["исследователь", "scientist", "researcher"]),
    ("солдат", &["военный", "боец", "soldier"]),
    ("наёмник", &["mercenary", "солдат удачи"]),
    ("киллер", &["убийца", "наёмный убийца", "killer", "assassin", "hitman"]),
    ("вор", &["плут", "воровка", "thief", "rogue"]),
    ("пират", &["корсар", "pirate"]),
    ("горничная", &["служанка", "maid"]),
    ("дворецкий", &["butler"]),
    // Fantasy and sci-fi archetypes
    ("маг", &["волшебник", "чародей", "колдун", "wizard", "mage", "sorcerer"]),
    ("ведьма", &["колдунья", "чародейка", "witch"]),
    ("рыцарь", &["паладин", "knight", "paladin"]),
    ("воин", &["боец", "warrior", "fighter"]),
    ("вампир", &["кровосос", "vampire"]),
    ("оборотень", &["ликантроп", "werewolf"]),
    ("демон", &["бес", "demon"]),
    ("ангел", &["angel"]),
    ("эльф", &["эльфийка", "elf"]),
    ("робот", &["андроид", "киборг", "robot", "android", "cyborg"]),
    ("король", &["монарх", "king"]),
    ("королева", &["queen"]),
    ("принцесса", &["princess"]),
    // Traits
    ("злой", &["злодей", "антагонист", "evil", "villain"]),
    ("добрый", &["милый", "kind", "sweet"]),
    ("застенчивый", &["робкий", "скромный", "shy"]),
    ("дерзкий", &["наглый", "bold", "cheeky"]),
    ("цундэрэ", &["цундере", "tsundere"]),
    ("яндэрэ", &["яндере", "yandere"]),
    // Genres
    ("фэнтези", &["фентези", "fantasy"]),
    ("романтика", &["любовь", "romance"]),
    ("ужасы", &["хоррор", "horror"]),
    ("аниме", &["anime"]),
    ("фантастика", &["sci-fi", "научная фантастика"]),
];
