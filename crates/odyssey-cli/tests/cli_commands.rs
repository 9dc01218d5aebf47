//! Integration tests for the odyssey CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn odyssey() -> Command {
    Command::cargo_bin("odyssey").unwrap()
}

// ---------------------------------------------------------------------------
// roster
// ---------------------------------------------------------------------------

#[test]
fn roster_lists_all_species() {
    odyssey().arg("roster").assert().success().stdout(
        predicate::str::contains("Xenobot")
            .and(predicate::str::contains("Plasmavore"))
            .and(predicate::str::contains("Nano Swarm"))
            .and(predicate::str::contains("Sand Worm"))
            .and(predicate::str::contains("Void Stalker"))
            .and(predicate::str::contains("5 enemy species")),
    );
}

// ---------------------------------------------------------------------------
// quests
// ---------------------------------------------------------------------------

#[test]
fn quests_lists_catalog() {
    odyssey().arg("quests").assert().success().stdout(
        predicate::str::contains("First Contact")
            .and(predicate::str::contains("The Awakening"))
            .and(predicate::str::contains("2 steps"))
            .and(predicate::str::contains("5 quests")),
    );
}

// ---------------------------------------------------------------------------
// items
// ---------------------------------------------------------------------------

#[test]
fn items_lists_catalog() {
    odyssey().arg("items").assert().success().stdout(
        predicate::str::contains("Plasma Rifle")
            .and(predicate::str::contains("Energy Cell"))
            .and(predicate::str::contains("14 items")),
    );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_cleanly() {
    odyssey()
        .args(["play", "--name", "Rook"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome, Rook the Human Warrior!")
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_status_shows_character_sheet() {
    odyssey()
        .args(["play", "--name", "Vex", "--race", "android", "--role", "rogue"])
        .write_stdin("status\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Vex the Android Rogue (Level 1)")
                .and(predicate::str::contains("HP: 90/90"))
                .and(predicate::str::contains("Energy: 120/120")),
        );
}

#[test]
fn play_fight_starts_combat() {
    odyssey()
        .args(["play", "--seed", "7"])
        .write_stdin("fight\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You encountered a ")
                .and(predicate::str::contains("Fighting: ")),
        );
}

#[test]
fn play_same_seed_is_deterministic() {
    let run = || {
        odyssey()
            .args(["play", "--seed", "99"])
            .write_stdin("fight\nattack\nattack\nquit\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn play_unknown_command_is_reported() {
    odyssey()
        .arg("play")
        .write_stdin("teleport\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: teleport"));
}

#[test]
fn play_rejects_unknown_role() {
    odyssey()
        .args(["play", "--role", "paladin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role"));
}

#[test]
fn play_rejects_unknown_race() {
    odyssey()
        .args(["play", "--race", "elf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown race"));
}
