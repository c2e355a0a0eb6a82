//! TwiML response documents
//!
//! The telephony platform drives the call from the markup returned by each
//! webhook. Only the verbs this service emits are modelled.

use std::borrow::Cow;
use std::fmt::{self, Write};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escape text and attribute values for inclusion in XML
pub fn escape_xml(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Text-to-speech prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Say {
    pub text: String,
    pub voice: String,
    pub language: String,
}

impl Say {
    pub fn new(text: impl Into<String>, voice: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: voice.into(),
            language: language.into(),
        }
    }

    fn write_xml(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            r#"<Say voice="{}" language="{}">{}</Say>"#,
            escape_xml(&self.voice),
            escape_xml(&self.language),
            escape_xml(&self.text)
        )
    }
}

/// Keypad (DTMF) input collection; the platform posts the digits to `action`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gather {
    pub num_digits: usize,
    pub action: String,
    pub method: String,
    /// Seconds to wait for input
    pub timeout: u32,
    /// Prompts played while waiting for input
    pub prompts: Vec<Say>,
}

impl Gather {
    pub fn new(num_digits: usize, action: impl Into<String>, timeout: u32) -> Self {
        Self {
            num_digits,
            action: action.into(),
            method: "POST".to_string(),
            timeout,
            prompts: Vec::new(),
        }
    }

    pub fn say(mut self, say: Say) -> Self {
        self.prompts.push(say);
        self
    }

    fn write_xml(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            r#"<Gather numDigits="{}" action="{}" method="{}" timeout="{}">"#,
            self.num_digits,
            escape_xml(&self.action),
            escape_xml(&self.method),
            self.timeout
        )?;
        for prompt in &self.prompts {
            prompt.write_xml(out)?;
        }
        out.push_str("</Gather>");
        Ok(())
    }
}

/// Transfer of the call to another number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    pub number: String,
    /// Seconds to ring before giving up
    pub timeout: Option<u32>,
}

impl Dial {
    fn write_xml(&self, out: &mut String) -> fmt::Result {
        match self.timeout {
            Some(timeout) => write!(out, r#"<Dial timeout="{}">"#, timeout)?,
            None => out.push_str("<Dial>"),
        }
        write!(out, "{}</Dial>", escape_xml(&self.number))
    }
}

/// A single instruction in a voice response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceVerb {
    Say(Say),
    Gather(Gather),
    Dial(Dial),
    Hangup,
}

/// Voice markup returned from call webhooks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceResponse {
    verbs: Vec<VoiceVerb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(mut self, say: Say) -> Self {
        self.verbs.push(VoiceVerb::Say(say));
        self
    }

    pub fn gather(mut self, gather: Gather) -> Self {
        self.verbs.push(VoiceVerb::Gather(gather));
        self
    }

    pub fn dial(mut self, number: impl Into<String>, timeout: Option<u32>) -> Self {
        self.verbs.push(VoiceVerb::Dial(Dial {
            number: number.into(),
            timeout,
        }));
        self
    }

    pub fn hangup(mut self) -> Self {
        self.verbs.push(VoiceVerb::Hangup);
        self
    }

    pub fn verbs(&self) -> &[VoiceVerb] {
        &self.verbs
    }

    /// All spoken text in document order, including prompts nested in gathers
    pub fn spoken_text(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        for verb in &self.verbs {
            match verb {
                VoiceVerb::Say(say) => texts.push(say.text.as_str()),
                VoiceVerb::Gather(gather) => {
                    texts.extend(gather.prompts.iter().map(|p| p.text.as_str()))
                }
                VoiceVerb::Dial(_) | VoiceVerb::Hangup => {}
            }
        }
        texts
    }

    /// The first gather in the response, if any
    pub fn find_gather(&self) -> Option<&Gather> {
        self.verbs.iter().find_map(|verb| match verb {
            VoiceVerb::Gather(gather) => Some(gather),
            _ => None,
        })
    }

    /// Whether the response ends the call
    pub fn ends_with_hangup(&self) -> bool {
        matches!(self.verbs.last(), Some(VoiceVerb::Hangup))
    }

    /// Render the document
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VoiceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::from(XML_DECLARATION);
        out.push_str("<Response>");
        for verb in &self.verbs {
            match verb {
                VoiceVerb::Say(say) => say.write_xml(&mut out)?,
                VoiceVerb::Gather(gather) => gather.write_xml(&mut out)?,
                VoiceVerb::Dial(dial) => dial.write_xml(&mut out)?,
                VoiceVerb::Hangup => out.push_str("<Hangup/>"),
            }
        }
        out.push_str("</Response>");
        f.write_str(&out)
    }
}

/// Messaging markup returned from SMS webhooks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagingResponse {
    messages: Vec<String>,
}

impl MessagingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, body: impl Into<String>) -> Self {
        self.messages.push(body.into());
        self
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MessagingResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(XML_DECLARATION)?;
        f.write_str("<Response>")?;
        for body in &self.messages {
            write!(f, "<Message>{}</Message>", escape_xml(body))?;
        }
        f.write_str("</Response>")
    }
}
