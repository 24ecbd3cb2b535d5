//! Folio Markup Reader
//!
//! Converts play markup into a [`Play`] tree using `quick-xml`'s pull reader.
//! This reader is purely structural: it records acts, scenes, speeches and the
//! roster, and leaves every semantic check (missing speakers included) to the
//! statistics engine.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::ast::{Act, Play, Scene, Speech};
use crate::errors::{FolioError, FolioResult};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses play markup into a [`Play`].
///
/// `name` is only used to label diagnostics (usually the file path).
pub fn parse_play(source: &str, name: &str) -> FolioResult<Play> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);
    let mut builder = PlayBuilder::default();

    loop {
        let position = reader_offset(&reader);
        match reader.read_event() {
            Ok(Event::Start(ref e)) => builder
                .open(&tag_name(e))
                .map_err(|message| FolioError::markup(message, name, source, position))?,
            Ok(Event::Empty(ref e)) => {
                builder
                    .open(&tag_name(e))
                    .map_err(|message| FolioError::markup(message, name, source, position))?;
                builder.close();
            }
            Ok(Event::End(_)) => builder.close(),
            Ok(Event::Text(ref e)) => match e.unescape() {
                Ok(text) => builder.text(&text),
                Err(err) => {
                    tracing::warn!("could not unescape text in {name}: {err}");
                    builder.text(&String::from_utf8_lossy(e));
                }
            },
            Ok(Event::CData(ref e)) => builder.text(&String::from_utf8_lossy(e)),
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(FolioError::markup(err.to_string(), name, source, position));
            }
            _ => {}
        }
    }

    if let Some(open) = builder.stack.last() {
        return Err(FolioError::markup(
            format!("unexpected end of document inside <{open}>"),
            name,
            source,
            source.len(),
        ));
    }
    if builder.seen_root {
        Ok(builder.finish())
    } else {
        Err(FolioError::markup("document has no root element", name, source, 0))
    }
}

// ============================================================================
// TREE BUILDER
// ============================================================================

/// Where the reader currently is, relative to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    PlayTitle,
    Persona,
    GroupedPersona,
    Act,
    ActTitle,
    Scene,
    SceneTitle,
    Speech,
    Speaker,
    Line,
    Other,
}

impl Position {
    fn of(path: &[String]) -> Self {
        let path: Vec<&str> = path.iter().map(String::as_str).collect();
        match path.as_slice() {
            ["TITLE"] => Self::PlayTitle,
            ["PERSONAE", "PERSONA"] => Self::Persona,
            ["PERSONAE", "PGROUP", "PERSONA"] => Self::GroupedPersona,
            ["ACT"] => Self::Act,
            ["ACT", "TITLE"] => Self::ActTitle,
            ["ACT", "SCENE"] => Self::Scene,
            ["ACT", "SCENE", "TITLE"] => Self::SceneTitle,
            ["ACT", "SCENE", "SPEECH"] => Self::Speech,
            ["ACT", "SCENE", "SPEECH", "SPEAKER"] => Self::Speaker,
            ["ACT", "SCENE", "SPEECH", "LINE"] => Self::Line,
            _ => Self::Other,
        }
    }

    fn collects_text(self) -> bool {
        matches!(
            self,
            Self::PlayTitle
                | Self::Persona
                | Self::GroupedPersona
                | Self::ActTitle
                | Self::SceneTitle
                | Self::Speaker
        )
    }
}

#[derive(Debug, Default)]
struct PlayBuilder {
    play: Play,
    /// Open element names, root first.
    stack: Vec<String>,
    seen_root: bool,
    text: String,
    primary: Vec<String>,
    grouped: Vec<String>,
    speech: Option<Speech>,
    speaker_seen: bool,
}

impl PlayBuilder {
    fn position(&self) -> Position {
        match self.stack.split_first() {
            Some((_root, rest)) => Position::of(rest),
            None => Position::Other,
        }
    }

    /// Fails with a message when `tag` would be a second root element.
    fn open(&mut self, tag: &str) -> Result<(), String> {
        if self.stack.is_empty() {
            if self.seen_root {
                return Err(format!("second top-level element <{tag}>"));
            }
            self.seen_root = true;
        }
        self.stack.push(tag.to_string());

        let position = self.position();
        if position.collects_text() {
            self.text.clear();
        }
        match position {
            Position::Act => self.play.acts.push(Act::default()),
            Position::Scene => {
                if let Some(act) = self.play.acts.last_mut() {
                    act.scenes.push(Scene::default());
                }
            }
            Position::Speech => {
                self.speech = Some(Speech::default());
                self.speaker_seen = false;
            }
            Position::Line => {
                if let Some(speech) = self.speech.as_mut() {
                    speech.lines += 1;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if self.position().collects_text() {
            self.text.push_str(text);
        }
    }

    fn close(&mut self) {
        let position = self.position();
        let text = non_blank(&self.text);
        match position {
            Position::PlayTitle => self.play.title = text,
            Position::Persona => self.primary.extend(text),
            Position::GroupedPersona => self.grouped.extend(text),
            Position::ActTitle => {
                if let Some(act) = self.play.acts.last_mut() {
                    act.title = text;
                }
            }
            Position::SceneTitle => {
                if let Some(scene) = self.current_scene() {
                    scene.title = text;
                }
            }
            Position::Speaker => {
                // Only the first designation counts.
                if !self.speaker_seen {
                    self.speaker_seen = true;
                    if let Some(speech) = self.speech.as_mut() {
                        speech.speaker = text;
                    }
                }
            }
            Position::Speech => {
                if let Some(speech) = self.speech.take() {
                    if let Some(scene) = self.current_scene() {
                        scene.speeches.push(speech);
                    }
                }
            }
            _ => {}
        }
        if position.collects_text() {
            self.text.clear();
        }
        self.stack.pop();
    }

    fn current_scene(&mut self) -> Option<&mut Scene> {
        self.play
            .acts
            .last_mut()
            .and_then(|act| act.scenes.last_mut())
    }

    fn finish(mut self) -> Play {
        self.play.cast = self.primary;
        self.play.cast.extend(self.grouped);
        tracing::debug!(
            acts = self.play.acts.len(),
            scenes = self.play.scene_count(),
            cast = self.play.cast.len(),
            "parsed play markup"
        );
        self.play
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn reader_offset(reader: &Reader<&[u8]>) -> usize {
    usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_play() {
        let play = parse_play("<PLAY></PLAY>", "test").unwrap();
        assert!(play.acts.is_empty());
        assert!(play.cast.is_empty());
        assert_eq!(play.title, None);
    }

    #[test]
    fn test_self_closing_line_counts() {
        let xml = "<PLAY><ACT><SCENE><SPEECH><SPEAKER>A</SPEAKER><LINE/><LINE>x</LINE></SPEECH></SCENE></ACT></PLAY>";
        let play = parse_play(xml, "test").unwrap();
        assert_eq!(play.acts[0].scenes[0].speeches[0], Speech::new("A", 2));
    }

    #[test]
    fn test_unclosed_root_fails() {
        let result = parse_play("<PLAY><ACT>", "test");
        assert!(matches!(result, Err(FolioError::Markup { .. })));
    }

    #[test]
    fn test_no_root_fails() {
        let result = parse_play("   ", "test");
        assert!(matches!(result, Err(FolioError::Markup { .. })));
    }

    #[test]
    fn test_second_root_is_rejected_at_its_offset() {
        let xml = "<PLAY></PLAY><OTHER/>";
        match parse_play(xml, "test") {
            Err(FolioError::Markup { span, .. }) => assert_eq!(span.offset(), 13),
            other => panic!("expected markup error, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_text_is_not_collected() {
        let xml = "<PLAY><TITLE>Ham<EM>ignored</EM>let</TITLE></PLAY>";
        let play = parse_play(xml, "test").unwrap();
        assert_eq!(play.title.as_deref(), Some("Hamlet"));
    }
}
