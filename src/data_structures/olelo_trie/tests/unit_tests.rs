// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the Olelo Trie.

use std::fs;
use std::io::{self, BufReader, Cursor, Read};

use tempfile::tempdir;
use test_case::test_case;

use crate::data_structures::olelo_trie::{OleloTrie, OleloTrieConfig, OleloTrieError};

fn cat_car_cart(config: OleloTrieConfig) -> OleloTrie {
    let mut trie = OleloTrie::with_config(config);
    trie.insert("cat", "feline");
    trie.insert("car", "vehicle");
    trie.insert("cart", "wheeled vehicle");
    trie
}

fn listing(trie: &OleloTrie, prefix: &str) -> Vec<(String, String)> {
    trie.words_with_prefix(prefix)
        .unwrap()
        .map(|(word, meaning)| text(word, meaning))
        .collect()
}

fn words(trie: &OleloTrie) -> Vec<String> {
    trie.iter().map(|(word, meaning)| text(word, meaning).0).collect()
}

fn text(word: Vec<u8>, meaning: &[u8]) -> (String, String) {
    (
        String::from_utf8(word).unwrap(),
        String::from_utf8(meaning.to_vec()).unwrap(),
    )
}

fn pair(word: &str, meaning: &str) -> (String, String) {
    (word.to_string(), meaning.to_string())
}

#[test]
fn test_trie_basic_operations() {
    let mut trie = OleloTrie::new();

    // Test initial state
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);

    // Test insertion
    assert!(trie.insert("hello", "world"));
    assert_eq!(trie.len(), 1);
    assert!(!trie.is_empty());

    // Test retrieval
    assert!(trie.search("hello"));
    assert_eq!(trie.get_meaning("hello"), Some(&b"world"[..]));
    assert!(!trie.search("nonexistent"));
    assert_eq!(trie.get_meaning("nonexistent"), None);

    // Keys are compared byte for byte
    assert!(!trie.search("HELLO"));

    // Test update
    assert!(!trie.insert("hello", "planet"));
    assert_eq!(trie.get_meaning("hello"), Some(&b"planet"[..]));
    assert_eq!(trie.len(), 1);

    // Test removal
    trie.delete_word("hello").unwrap();
    assert!(trie.is_empty());
    assert!(!trie.search("hello"));
    assert!(matches!(
        trie.delete_word("hello"),
        Err(OleloTrieError::NotACompleteWord(_))
    ));
}

#[test]
fn test_prefix_scenario_with_delete() {
    let mut trie = cat_car_cart(OleloTrieConfig::default());

    assert_eq!(
        listing(&trie, "ca"),
        vec![
            pair("car", "vehicle"),
            pair("cart", "wheeled vehicle"),
            pair("cat", "feline"),
        ]
    );

    trie.delete_word("car").unwrap();

    assert_eq!(
        listing(&trie, "ca"),
        vec![pair("cart", "wheeled vehicle"), pair("cat", "feline")]
    );
    assert!(!trie.search("car"));
    assert!(trie.search("cart"));
    assert!(trie.search("cat"));
}

#[test]
fn test_prefix_includes_prefix_word_itself() {
    let trie = cat_car_cart(OleloTrieConfig::default());
    assert_eq!(
        listing(&trie, "car"),
        vec![pair("car", "vehicle"), pair("cart", "wheeled vehicle")]
    );
}

#[test]
fn test_prefix_missing_path_reports_not_found() {
    let trie = cat_car_cart(OleloTrieConfig::default());
    match trie.words_with_prefix("dog") {
        Err(OleloTrieError::KeyNotFound(prefix)) => assert_eq!(prefix, "dog"),
        other => panic!("unexpected result: {:?}", other.map(|w| w.count())),
    }
}

#[test]
fn test_prefix_existing_path_without_words_below_is_empty() {
    let mut trie = cat_car_cart(OleloTrieConfig::default());
    trie.delete_word("cart").unwrap();

    // Logical deletion leaves the 't' node in place
    assert_eq!(trie.words_with_prefix("cart").unwrap().count(), 0);
}

#[test]
fn test_empty_prefix_lists_everything_sorted() {
    let mut trie = OleloTrie::new();
    trie.insert("b", "2");
    trie.insert("a", "1");
    trie.insert("ab", "3");
    trie.insert("", "root");

    assert_eq!(words(&trie), vec!["", "a", "ab", "b"]);
    assert_eq!(listing(&trie, "").len(), 4);
}

#[test]
fn test_empty_word_lives_on_root() {
    let mut trie = OleloTrie::new();
    assert!(!trie.search(""));
    assert_eq!(trie.get_meaning(""), None);

    assert!(trie.insert("", "nothing"));
    assert!(trie.search(""));
    assert_eq!(trie.get_meaning(""), Some(&b"nothing"[..]));
    assert_eq!(trie.node_count(), 1);

    trie.delete_word("").unwrap();
    assert!(!trie.search(""));
    assert!(trie.is_empty());
}

#[test]
fn test_empty_meaning_is_distinct_from_absent() {
    let mut trie = OleloTrie::new();
    trie.insert("blank", "");

    assert!(trie.search("blank"));
    assert_eq!(trie.get_meaning("blank"), Some(&b""[..]));
    assert_eq!(trie.get_meaning("blan"), None);
}

#[test_case("ca" ; "junction node")]
#[test_case("c" ; "first byte")]
fn test_junction_nodes_are_not_words(word: &str) {
    let mut trie = cat_car_cart(OleloTrieConfig::default());

    assert!(!trie.search(word));
    assert_eq!(trie.get_meaning(word), None);
    assert!(matches!(
        trie.delete_word(word),
        Err(OleloTrieError::NotACompleteWord(_))
    ));
    assert_eq!(trie.len(), 3);
}

#[test_case("dog" ; "unrelated word")]
#[test_case("carts" ; "extends a stored word")]
#[test_case("cb" ; "diverges after shared byte")]
fn test_delete_missing_path(word: &str) {
    let mut trie = cat_car_cart(OleloTrieConfig::default());

    match trie.delete_word(word) {
        Err(OleloTrieError::KeyNotFound(missing)) => assert_eq!(missing, word),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(trie.len(), 3);
}

#[test]
fn test_logical_delete_keeps_nodes() {
    let mut trie = OleloTrie::new();
    trie.insert("abc", "x");
    assert_eq!(trie.node_count(), 4);

    trie.delete_word("abc").unwrap();
    assert_eq!(trie.node_count(), 4);
    assert!(trie.is_empty());
}

#[test]
fn test_pruning_detaches_dead_branch() {
    let mut trie = cat_car_cart(OleloTrieConfig::new().with_prune_on_delete(true));
    // root, c, a, t, r, t
    assert_eq!(trie.node_count(), 6);

    trie.delete_word("cart").unwrap();
    assert_eq!(trie.node_count(), 5);
    assert!(trie.words_with_prefix("cart").is_err());

    // "car" keeps its node because it is still terminal
    trie.delete_word("cat").unwrap();
    assert_eq!(trie.node_count(), 4);

    trie.delete_word("car").unwrap();
    assert_eq!(trie.node_count(), 1);
    assert!(trie.words_with_prefix("c").is_err());
}

#[test]
fn test_pruning_stops_at_shared_nodes() {
    let mut trie = cat_car_cart(OleloTrieConfig::new().with_prune_on_delete(true));

    trie.delete_word("car").unwrap();
    // 'r' still leads to "cart"
    assert_eq!(trie.node_count(), 6);
    assert!(trie.search("cart"));
}

#[test]
fn test_pruned_slots_are_reused() {
    let mut trie = OleloTrie::with_config(OleloTrieConfig::new().with_prune_on_delete(true));
    for round in 0..10 {
        trie.insert("ephemeral", format!("round {round}"));
        trie.delete_word("ephemeral").unwrap();
    }
    assert_eq!(trie.node_count(), 1);

    trie.insert("kept", "yes");
    assert_eq!(trie.node_count(), 5);
    assert_eq!(trie.get_meaning("kept"), Some(&b"yes"[..]));
}

#[test]
fn test_clear_resets_to_root() {
    let mut trie = cat_car_cart(OleloTrieConfig::default());
    trie.clear();

    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
    assert_eq!(trie.iter().count(), 0);
}

#[test]
fn test_collect_and_extend() {
    let mut trie: OleloTrie = vec![("one", "1"), ("two", "2")].into_iter().collect();
    trie.extend([("three", "3".to_string())]);

    assert_eq!(trie.len(), 3);
    let listed: Vec<Vec<u8>> = (&trie).into_iter().map(|(word, _)| word).collect();
    assert_eq!(listed, vec![b"one".to_vec(), b"three".to_vec(), b"two".to_vec()]);
}

#[test]
fn test_multibyte_words_round_trip_through_listing() {
    let mut trie = OleloTrie::new();
    trie.insert("ʻōlelo", "language");
    trie.insert("ʻohana", "family");

    let listed = words(&trie);
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&"ʻōlelo".to_string()));
    assert!(listed.contains(&"ʻohana".to_string()));
    assert_eq!(trie.get_meaning("ʻōlelo"), Some(&b"language"[..]));
}

#[test]
fn test_write_to_and_read_from() {
    let trie = cat_car_cart(OleloTrieConfig::default());
    let mut buffer = Vec::new();
    assert_eq!(trie.write_to(&mut buffer).unwrap(), 3);
    assert_eq!(
        String::from_utf8(buffer.clone()).unwrap(),
        "car\nvehicle\ncart\nwheeled vehicle\ncat\nfeline\n"
    );

    let mut restored = OleloTrie::new();
    assert_eq!(restored.read_from(Cursor::new(buffer)).unwrap(), 3);
    assert_eq!(listing(&restored, ""), listing(&trie, ""));
}

#[test]
fn test_read_from_discards_dangling_word() {
    let mut trie = OleloTrie::new();
    let applied = trie
        .read_from(Cursor::new("cat\nfeline\ndangling\n"))
        .unwrap();

    assert_eq!(applied, 1);
    assert!(trie.search("cat"));
    assert!(!trie.search("dangling"));
}

/// Yields `data`, then fails every later read.
struct FailingAfter {
    data: &'static [u8],
    pos: usize,
}

impl Read for FailingAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() {
            return Err(io::Error::new(io::ErrorKind::Other, "device went away"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn test_read_from_keeps_records_before_failure() {
    let mut trie = OleloTrie::new();
    let reader = BufReader::new(FailingAfter {
        data: b"cat\nfeline\ndog\n",
        pos: 0,
    });

    let err = trie.read_from(reader).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);

    assert!(trie.search("cat"));
    assert_eq!(trie.get_meaning("cat"), Some(&b"feline"[..]));
    assert!(!trie.search("dog"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_read_from_accepts_single_byte_encoding() {
    let mut trie = OleloTrie::new();
    let applied = trie
        .read_from(Cursor::new(&b"caf\xe9\ncoffee house\nzoo\nanimals\n"[..]))
        .unwrap();

    assert_eq!(applied, 2);
    assert!(trie.search(b"caf\xe9"));
    assert_eq!(trie.get_meaning(b"caf\xe9"), Some(&b"coffee house"[..]));
    assert_eq!(trie.get_meaning("zoo"), Some(&b"animals"[..]));
    assert_eq!(trie.words_with_prefix(b"caf").unwrap().count(), 1);
}

#[test]
fn test_single_byte_dictionary_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    let contents = b"caf\xe9\ncoffee house\nna\xefve\nunaffected \xb7 simple\n";
    fs::write(&path, contents).unwrap();

    let mut trie = OleloTrie::new();
    assert_eq!(trie.load(&path).unwrap(), 2);
    trie.save(&path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), contents);
}

#[test]
fn test_save_and_load_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");

    let trie = cat_car_cart(OleloTrieConfig::default());
    assert_eq!(trie.save(&path).unwrap(), 3);

    let mut loaded = OleloTrie::new();
    assert_eq!(loaded.load(&path).unwrap(), 3);
    assert_eq!(listing(&loaded, ""), listing(&trie, ""));
}

#[test]
fn test_save_overwrites_destination() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, "stale\nentry\nmore\nstale entries\n").unwrap();

    let mut trie = OleloTrie::new();
    trie.insert("fresh", "entry");
    trie.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\nentry\n");
}

#[test]
fn test_save_refuses_line_breaks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, "keep\nme\n").unwrap();

    let mut trie = OleloTrie::new();
    trie.insert("ok", "fine");
    trie.insert("bad", "two\nlines");

    match trie.save(&path) {
        Err(OleloTrieError::EmbeddedNewline(word)) => assert_eq!(word, "bad"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep\nme\n");
}

#[test]
fn test_save_to_unwritable_destination() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("dictionary.txt");

    let trie = cat_car_cart(OleloTrieConfig::default());
    assert!(matches!(trie.save(&path), Err(OleloTrieError::Io { .. })));
}

#[test]
fn test_load_missing_source_leaves_trie_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let mut trie = cat_car_cart(OleloTrieConfig::default());
    match trie.load(&path) {
        Err(OleloTrieError::SourceMissing(missing)) => assert_eq!(missing, path),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(trie.len(), 3);
}

#[test]
fn test_load_merges_and_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, "cat\nhouse cat\ndog\ncanine\n").unwrap();

    let mut trie = cat_car_cart(OleloTrieConfig::default());
    assert_eq!(trie.load(&path).unwrap(), 2);

    assert_eq!(trie.len(), 4);
    assert_eq!(trie.get_meaning("cat"), Some(&b"house cat"[..]));
    assert_eq!(trie.get_meaning("dog"), Some(&b"canine"[..]));
}
