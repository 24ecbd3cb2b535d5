// tests/parser_tests.rs

mod common;

use common::SAMPLE_PLAY;
use folio::ast::Speech;
use folio::syntax::parse_play;
use folio::FolioError;

#[test]
fn test_parse_structure() {
    let play = parse_play(SAMPLE_PLAY, "sample.xml").unwrap();
    assert_eq!(play.title.as_deref(), Some("The Tragedy of Testing"));
    assert_eq!(play.acts.len(), 2);
    assert_eq!(play.acts[0].scenes.len(), 2);
    assert_eq!(play.acts[1].scenes.len(), 1);
    assert_eq!(play.scene_count(), 3);
    assert_eq!(play.acts[0].title.as_deref(), Some("ACT I"));
    assert_eq!(
        play.acts[0].scenes[1].title.as_deref(),
        Some("SCENE II. A room of state.")
    );
}

#[test]
fn test_parse_counts_only_line_entries() {
    let play = parse_play(SAMPLE_PLAY, "sample.xml").unwrap();
    // The stage direction between the lines is not a line.
    assert_eq!(
        play.acts[0].scenes[1].speeches,
        vec![Speech::new("HAMLET", 3)]
    );
    assert_eq!(
        play.acts[0].scenes[0].speeches,
        vec![
            Speech::new("HORATIO", 2),
            Speech::new("HAMLET", 1),
            Speech::new("HORATIO", 1),
        ]
    );
}

#[test]
fn test_roster_is_flattened_primary_then_grouped() {
    let play = parse_play(SAMPLE_PLAY, "sample.xml").unwrap();
    assert_eq!(
        play.cast,
        vec!["HAMLET", "HORATIO", "GHOST", "ROSENCRANTZ", "GUILDENSTERN"]
    );
}

#[test]
fn test_entities_are_unescaped() {
    let xml = "<PLAY><PERSONAE><PERSONA>ROMEO &amp; co</PERSONA></PERSONAE></PLAY>";
    let play = parse_play(xml, "test").unwrap();
    assert_eq!(play.cast, vec!["ROMEO & co"]);
}

#[test]
fn test_speech_without_speaker_is_kept_unattributed() {
    let xml = "<PLAY><ACT><SCENE><SPEECH><LINE>a</LINE><LINE>b</LINE></SPEECH></SCENE></ACT></PLAY>";
    let play = parse_play(xml, "test").unwrap();
    assert_eq!(play.acts[0].scenes[0].speeches, vec![Speech::unattributed(2)]);
}

#[test]
fn test_blank_speaker_is_unattributed() {
    let xml = "<PLAY><ACT><SCENE><SPEECH><SPEAKER>  </SPEAKER><LINE>a</LINE></SPEECH></SCENE></ACT></PLAY>";
    let play = parse_play(xml, "test").unwrap();
    assert_eq!(play.acts[0].scenes[0].speeches[0].speaker, None);
}

#[test]
fn test_first_speaker_wins() {
    let xml = "<PLAY><ACT><SCENE><SPEECH><SPEAKER>FIRST</SPEAKER><SPEAKER>SECOND</SPEAKER><LINE>a</LINE></SPEECH></SCENE></ACT></PLAY>";
    let play = parse_play(xml, "test").unwrap();
    assert_eq!(play.acts[0].scenes[0].speeches[0], Speech::new("FIRST", 1));
}

#[test]
fn test_untitled_acts_and_scenes_are_tolerated() {
    let xml = "<PLAY><ACT><SCENE/><SCENE></SCENE></ACT><ACT/></PLAY>";
    let play = parse_play(xml, "test").unwrap();
    assert_eq!(play.acts.len(), 2);
    assert_eq!(play.acts[0].title, None);
    assert_eq!(play.acts[0].scenes.len(), 2);
    assert!(play.acts[1].scenes.is_empty());
}

#[test]
fn test_prologue_and_induction_are_skipped() {
    let xml = "<PLAY><INDUCT><SCENE><SPEECH><SPEAKER>SLY</SPEAKER><LINE>x</LINE></SPEECH></SCENE></INDUCT>\
               <ACT><PROLOGUE><SPEECH><SPEAKER>CHORUS</SPEAKER><LINE>y</LINE></SPEECH></PROLOGUE>\
               <SCENE><SPEECH><SPEAKER>A</SPEAKER><LINE>z</LINE></SPEECH></SCENE></ACT></PLAY>";
    let play = parse_play(xml, "test").unwrap();
    assert_eq!(play.scene_count(), 1);
    assert_eq!(play.acts[0].scenes[0].speeches, vec![Speech::new("A", 1)]);
}

#[test]
fn test_mismatched_tag_fails_with_markup_error() {
    let result = parse_play("<PLAY><ACT></SCENE></PLAY>", "broken.xml");
    assert!(matches!(result, Err(FolioError::Markup { .. })));
}

#[test]
fn test_truncated_document_fails_with_markup_error() {
    let result = parse_play("<PLAY><ACT><SCENE>", "broken.xml");
    assert!(matches!(result, Err(FolioError::Markup { .. })));
}

#[test]
fn test_second_top_level_element_fails_with_markup_error() {
    let xml = "<PLAY><ACT><SCENE><SPEECH><SPEAKER>A</SPEAKER><LINE>a</LINE></SPEECH></SCENE></ACT></PLAY>\
               <OTHER><ACT><SCENE><SPEECH><SPEAKER>Z</SPEAKER><LINE>b</LINE><LINE>c</LINE></SPEECH></SCENE></ACT></OTHER>";
    let result = parse_play(xml, "two-roots.xml");
    assert!(matches!(result, Err(FolioError::Markup { .. })));
}
