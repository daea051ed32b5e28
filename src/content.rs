//! Portfolio content embedded in the application.
//!
//! Pages and case studies are plain configuration data: markdown bodies in
//! const tables, compiled into the executable. Section ids double as scroll
//! anchors for the side navigation bar.

/// A case study shown under `/projects/<slug>`.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Matches a category id from the side bar's filter buttons.
    pub category: &'static str,
    pub year: &'static str,
    pub sections: &'static [Section],
    /// Closing "next steps" list; empty when the study has shipped.
    pub next_steps_intro: &'static str,
    pub next_steps: &'static [&'static str],
}

/// An anchored section of a case study. `id` is the scroll anchor.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// All case studies, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        slug: "guardian",
        title: "Guardian",
        tagline: "A personal-safety companion that keeps trusted contacts in the loop",
        category: "design",
        year: "2024",
        sections: GUARDIAN_SECTIONS,
        next_steps_intro: "",
        next_steps: &[],
    },
    Project {
        slug: "bookmind",
        title: "Bookmind",
        tagline: "Rethinking the Goodreads shelf for readers who never finish a list",
        category: "design",
        year: "2023",
        sections: BOOKMIND_SECTIONS,
        next_steps_intro: "Moving forward, we've identified key areas to focus on for \
continued improvement of the Goodreads experience:",
        next_steps: &[
            "Conduct second-round testing on mobile experience",
            "Develop high fidelity prototypes incorporating the proposed solutions and \
further validate changes through a second round of user testing.",
        ],
    },
    Project {
        slug: "angular",
        title: "Atlas Dashboard",
        tagline: "An Angular analytics dashboard for a logistics control room",
        category: "coding",
        year: "2022",
        sections: ANGULAR_SECTIONS,
        next_steps_intro: "",
        next_steps: &[],
    },
];

/// Look up a case study by its route slug.
pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

const GUARDIAN_SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        title: "Project Overview",
        body: r#"Guardian is a personal-safety app for people who walk home alone: it
shares a live route with a small circle of trusted contacts and escalates
only when something actually goes wrong.

I led research and product design over twelve weeks, from first interviews
to a tested high-fidelity prototype. The walkthrough below follows the
process in order, starting with [the problem](#problem) we set out on.
"#,
    },
    Section {
        id: "problem",
        title: "The Problem",
        body: r#"Most safety apps assume an emergency is already happening. In our
interviews, what people wanted was much quieter: a sense that *someone
knows where I am* without broadcasting their location to an entire contact
list, and without false alarms that teach everyone to ignore the app.

> "I don't want a panic button. I want my sister to notice if I stop
> moving for ten minutes."

That tension — ambient reassurance versus alarm fatigue — became the core
design problem.
"#,
    },
    Section {
        id: "research-discovery",
        title: "Research And Discovery",
        body: r#"We ran twelve semi-structured interviews and a diary study across one
week of late commutes. Three findings shaped everything that followed:

- **Check-ins beat tracking.** Continuous location sharing felt invasive;
  a scheduled check-in felt like care.
- **Escalation must be gradual.** A missed check-in should nudge the
  walker first, contacts second, emergency services never by default.
- **Setup is the product.** If choosing contacts takes more than a minute,
  the app never gets configured at all.
"#,
    },
    Section {
        id: "design-goals",
        title: "Design Goals",
        body: r#"The findings condensed into four goals that every screen was measured
against:

1. Reassure without surveilling.
2. Escalate gradually and reversibly.
3. Make the first run a sixty-second task.
4. Keep the walking screen glanceable at arm's length.
"#,
    },
    Section {
        id: "key-features",
        title: "Key Features",
        body: r#"**Route sessions.** A walk is a session with a start, an expected end,
and a circle of up to three contacts. Sessions end themselves on arrival.

**Soft check-ins.** A gentle vibration asks the walker to confirm; only
two ignored prompts notify the circle.

**One-screen setup.** Contacts, default route, and check-in cadence all
live on a single configuration card.
"#,
    },
    Section {
        id: "user-feedback",
        title: "User Feedback & Iterations",
        body: r#"Five moderated sessions with the mid-fidelity prototype sent us back to
the drawing board twice. Testers missed the check-in prompt while the
phone was in a pocket, so the prompt gained an escalating haptic pattern.
The arrival confirmation initially auto-dismissed; testers wanted the
small ritual of ending the walk themselves, so it stayed manual.

The biggest surprise: contacts wanted *less* information than we offered.
The circle view was cut from a live map to a single status line.
"#,
    },
    Section {
        id: "design-system",
        title: "Design System",
        body: r#"The visual language leans warm rather than clinical: a cream ground,
deep brown ink, and a single coral accent reserved for escalation states.
Type is set in two sizes only, and every interactive element keeps a
44-point touch target. Components were documented as a small Figma
library with states for idle, walking, prompted, and escalated.
"#,
    },
    Section {
        id: "reflection",
        title: "Reflection",
        body: r#"Designing for safety meant designing for the 99% of walks where nothing
happens. The quiet path through the app deserved as much attention as the
emergency path, and the research kept pulling us back to that balance.

Given another cycle, I would prototype the contact's side first — the
circle's experience turned out to drive trust in the product more than
the walker's own screens did.
"#,
    },
];

const BOOKMIND_SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        title: "Project Overview",
        body: r#"Bookmind is a concept redesign of the Goodreads shelf, focused on the
gap between *saving* books and *choosing* the next one. A four-week
sprint covered research, flows, and a tested prototype of the new shelf.
"#,
    },
    Section {
        id: "problem",
        title: "The Problem",
        body: r#"Readers file hundreds of titles under "want to read" and then pick their
next book somewhere else entirely. The shelf is a graveyard, not a queue:
no sense of mood, no memory of why a book was saved, and sorting options
that reward recency over intent.
"#,
    },
    Section {
        id: "key-features",
        title: "Key Features",
        body: r#"**Why-notes.** Saving a book asks for three words about why. The note
resurfaces when browsing the shelf, restoring the original impulse.

**Mood lanes.** Shelves regroup by reading mood rather than date added,
with lanes the reader names themselves.

**A queue of three.** Only three books can sit in the up-next queue,
turning an endless list into a small decision.
"#,
    },
    Section {
        id: "reflection",
        title: "Reflection",
        body: r#"Testing showed the why-notes carried the concept: five of six
participants scrolled their own shelf just to re-read them. The queue
limit was divisive and would need a softer framing in a second round.
"#,
    },
];

const ANGULAR_SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        title: "Project Overview",
        body: r#"Atlas is a control-room dashboard for a regional logistics operator:
live vehicle status, route exceptions, and depot throughput on a single
wall-mounted screen. I built the front end over six months as one of two
engineers.
"#,
    },
    Section {
        id: "stack",
        title: "Stack & Architecture",
        body: r#"The client is Angular with NgRx for state and a websocket feed for
vehicle telemetry. Chart panels render through a thin wrapper around
`d3-scale`, and the layout grid is persisted per operator. The feed
layer coalesces bursts of telemetry into animation frames, which kept
the wall display at a steady sixty updates per second during peak hours.
"#,
    },
    Section {
        id: "reflection",
        title: "Reflection",
        body: r#"The hardest problems were editorial, not technical: deciding which of
ninety possible signals deserved wall space. The dashboard shipped with
eleven. Every one of them earned its place in an operator interview.
"#,
    },
];

/// Landing page copy.
pub const HOME_CONTENT: &str = r#"# Hi, I'm Noa.

I'm a product designer and front-end developer who cares about the quiet
parts of software: the first minute of setup, the empty states, the
moments where nothing should happen.

This site collects a few case studies of that work. Start with the
projects, or read a little more about me.
"#;

/// About page copy.
pub const ABOUT_CONTENT: &str = r#"# About

I've spent the last six years moving between design and engineering:
research and prototyping on product teams, then building the front ends
that shipped the designs. The combination keeps me honest in both
directions — designs stay buildable, and code stays humane.

Away from a screen I'm usually walking the coast path or rebinding old
paperbacks.

---

*This viewer itself is a small Rust and egui project; the source is part
of the portfolio.*
"#;
