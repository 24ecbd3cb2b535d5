//! Shared fixtures for Folio integration tests.

#![allow(dead_code)]

use folio::ast::{Act, Play, Scene, Speech};

/// A short play in the markup layout the reader expects.
pub const SAMPLE_PLAY: &str = r#"<?xml version="1.0"?>
<!DOCTYPE PLAY SYSTEM "play.dtd">
<PLAY>
<TITLE>The Tragedy of Testing</TITLE>
<FM><P>Front matter is skipped.</P></FM>
<PERSONAE>
<TITLE>Dramatis Personae</TITLE>
<PERSONA>HAMLET</PERSONA>
<PERSONA>HORATIO</PERSONA>
<PGROUP>
<PERSONA>ROSENCRANTZ</PERSONA>
<PERSONA>GUILDENSTERN</PERSONA>
<GRPDESCR>courtiers.</GRPDESCR>
</PGROUP>
<PERSONA>GHOST</PERSONA>
</PERSONAE>
<ACT><TITLE>ACT I</TITLE>
<SCENE><TITLE>SCENE I. Elsinore.</TITLE>
<STAGEDIR>Enter HORATIO</STAGEDIR>
<SPEECH>
<SPEAKER>HORATIO</SPEAKER>
<LINE>Who's there?</LINE>
<LINE>Nay, answer me.</LINE>
</SPEECH>
<SPEECH>
<SPEAKER>HAMLET</SPEAKER>
<LINE>Long live the king!</LINE>
</SPEECH>
<SPEECH>
<SPEAKER>HORATIO</SPEAKER>
<LINE>He.</LINE>
</SPEECH>
</SCENE>
<SCENE><TITLE>SCENE II. A room of state.</TITLE>
<SPEECH>
<SPEAKER>HAMLET</SPEAKER>
<LINE>A little more than kin,</LINE>
<STAGEDIR>Aside</STAGEDIR>
<LINE>and less than kind.</LINE>
<LINE>Not so, my lord.</LINE>
</SPEECH>
</SCENE>
</ACT>
<ACT><TITLE>ACT II</TITLE>
<SCENE><TITLE>SCENE I. A room.</TITLE>
<SPEECH>
<SPEAKER>ROSENCRANTZ</SPEAKER>
<LINE>My lord!</LINE>
</SPEECH>
<SPEECH>
<SPEAKER>HORATIO</SPEAKER>
<LINE>Good &amp; kind.</LINE>
</SPEECH>
</SCENE>
</ACT>
</PLAY>
"#;

pub fn speech(speaker: &str, lines: usize) -> Speech {
    Speech::new(speaker, lines)
}

pub fn scene(speeches: Vec<Speech>) -> Scene {
    Scene::with_speeches(speeches)
}

pub fn act(scenes: Vec<Scene>) -> Act {
    Act::with_scenes(scenes)
}

pub fn play(acts: Vec<Act>) -> Play {
    Play {
        acts,
        ..Play::default()
    }
}

/// Act 1 with two scenes, act 2 with one.
pub fn three_scene_play() -> Play {
    play(vec![
        act(vec![
            scene(vec![speech("A", 3), speech("B", 1)]),
            scene(vec![speech("B", 2)]),
        ]),
        act(vec![scene(vec![speech("A", 4), speech("C", 7)])]),
    ])
}
