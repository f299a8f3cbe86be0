//! Static tables behind each content topic.

use crate::{
    ContactLink, FileEntry, FileKind, HelpEntry, ProjectCard, Section, SkillLevel, SystemStat,
};

pub(crate) const ABOUT: &[Section] = &[
    Section {
        heading: "WHO AM I?",
        body: "High school student & maker based in the US. I build things and solve problems.",
    },
    Section {
        heading: "WHAT I DO",
        body: "ESP32 projects, PCB design, web development with Firebase. Not full-stack but getting there.",
    },
    Section {
        heading: "INTERESTS",
        body: "Video games, programming, music (flute), soccer, biking, and more video games.",
    },
];

pub(crate) const PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        title: "Sunhaven Module",
        summary: "Net-zero 3D-printed housing unit. 1st place Autodesk 2025 contest winner.",
        link: "https://www.instructables.com/SunHaven-Module-an-Affordable-Net-Zero-Passively-H/",
        techs: &["Revit", "Fusion360"],
    },
    ProjectCard {
        title: "Mini Network Operating Center",
        summary: "WiFi health checker using ESP32 C3 Supermini with TFT display.",
        link: "https://www.instructables.com/Solderless-Portable-Mini-Network-Operating-Center-/",
        techs: &["Arduino", "ESP32", "TFT"],
    },
    ProjectCard {
        title: "AED for All Website",
        summary: "Nonprofit website for improving cardiac awareness in the community.",
        link: "https://aedforall.org/",
        techs: &["HTML", "CSS", "JS", "Firebase"],
    },
    ProjectCard {
        title: "Hexapod",
        summary: "Modular hexagonal housing unit. 1st place Autodesk architecture contest.",
        link: "https://www.instructables.com/HexaPod-All-in-One-Modular-Interconnected-Living-S/",
        techs: &["Fusion360", "Blender"],
    },
    ProjectCard {
        title: "Robot Workshop",
        summary: "Futuristic robot 3D rendering. Autodesk Visual Effects contest winner.",
        link: "https://www.instructables.com/The-Robot-Workshop/",
        techs: &["Fusion360", "Blender"],
    },
];

pub(crate) const SKILLS: &[SkillLevel] = &[
    SkillLevel { name: "Web Dev (Frontend)", level: 75 },
    SkillLevel { name: "Web Dev (Backend)", level: 60 },
    SkillLevel { name: "Python", level: 30 },
    SkillLevel { name: "Arduino IDE", level: 80 },
    SkillLevel { name: "ESP32/IoT", level: 85 },
    SkillLevel { name: "UI/UX Design", level: 55 },
    SkillLevel { name: "PCB Design", level: 65 },
];

pub(crate) const CONTACT: &[ContactLink] = &[
    ContactLink {
        label: "GitHub",
        href: Some("https://github.com/I-s-h-a-n-C"),
        note: None,
    },
    ContactLink {
        label: "Email",
        href: Some("mailto:chackris.ish@gmail.com"),
        note: None,
    },
    ContactLink {
        label: "Instructables",
        href: Some("https://www.instructables.com/member/avidgamer/"),
        note: None,
    },
    ContactLink {
        label: "YouTube",
        href: Some("https://www.youtube.com/@iseecircuits"),
        note: None,
    },
    ContactLink {
        label: "Slack",
        href: None,
        note: Some("Coming soon!"),
    },
];

pub(crate) const FILES: &[FileEntry] = &[
    FileEntry { name: "projects/", kind: FileKind::Folder },
    FileEntry { name: "resume.pdf", kind: FileKind::Pdf },
    FileEntry { name: "cover_letter.doc", kind: FileKind::Document },
    FileEntry { name: "portfolio.zip", kind: FileKind::Archive },
    FileEntry { name: "github_keys.txt", kind: FileKind::Text },
];

pub(crate) const SYSTEM: &[SystemStat] = &[
    SystemStat { label: "CPU", value: "ESP32-S3 @ 240MHz", usage: Some(67) },
    SystemStat { label: "Memory", value: "8GB RAM", usage: Some(45) },
    SystemStat { label: "Disk", value: "256GB SSD", usage: Some(78) },
    SystemStat { label: "Network", value: "WiFi Connected", usage: Some(12) },
    SystemStat { label: "Uptime", value: "42 days, 7 hours", usage: None },
];

pub(crate) const QUOTES: &[&str] = &[
    "\"My code works. I don't actually know why.\" - me",
    "\"I don't fix bugs. I make new features that hide them.\" - me",
    "\"That wasn't me.\" - me",
    "\"It's a feature, not a bug.\" - me",
    "\"If it compiles on first try, something is wrong.\" - me",
];

pub(crate) const HELP: &[HelpEntry] = &[
    HelpEntry { command: "help", usage: "help", summary: "List all commands" },
    HelpEntry { command: "about", usage: "about", summary: "About me" },
    HelpEntry { command: "projects", usage: "projects", summary: "My projects" },
    HelpEntry { command: "skills", usage: "skills", summary: "Technical skills" },
    HelpEntry { command: "contact", usage: "contact", summary: "Contact information" },
    HelpEntry { command: "files", usage: "files", summary: "Browse files" },
    HelpEntry { command: "system", usage: "system", summary: "System monitor" },
    HelpEntry { command: "quote", usage: "quote", summary: "Random quotes" },
    HelpEntry { command: "surprise", usage: "surprise", summary: "???" },
    HelpEntry { command: "neo", usage: "neo", summary: "Matrix mode" },
    HelpEntry { command: "color", usage: "color [scheme]", summary: "Change color scheme" },
    HelpEntry { command: "theme", usage: "theme [name]", summary: "Change terminal theme" },
    HelpEntry { command: "clear", usage: "clear", summary: "Clear screen" },
    HelpEntry { command: "snake", usage: "snake", summary: "Play Snake" },
    HelpEntry { command: "pong", usage: "pong", summary: "Play Pong" },
    HelpEntry { command: "exit", usage: "exit", summary: "Close this terminal window" },
];
