use rand::Rng;

use super::model::Quote;

const BUILTIN: &[(&str, &str)] = &[
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Simplicity is the ultimate sophistication.", "Leonardo da Vinci"),
    ("The secret of getting ahead is getting started.", "Mark Twain"),
    ("You miss 100% of the shots you don't take.", "Wayne Gretzky"),
    ("Talk is cheap. Show me the code.", "Linus Torvalds"),
    (
        "Programs must be written for people to read, and only incidentally for machines to execute.",
        "Hal Abelson",
    ),
    (
        "Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
        "Martin Fowler",
    ),
    ("First, solve the problem. Then, write the code.", "John Johnson"),
    ("Premature optimization is the root of all evil.", "Donald Knuth"),
    (
        "Debugging is twice as hard as writing the code in the first place. Therefore, if you write the code as cleverly as possible, you are, by definition, not smart enough to debug it.",
        "Brian Kernighan",
    ),
    ("It's not a bug – it's an undocumented feature.", "Anonymous"),
    (
        "There are only two hard things in Computer Science: cache invalidation and naming things.",
        "Phil Karlton",
    ),
    (
        "Walking on water and developing software from a specification are easy if both are frozen.",
        "Edward V. Berard",
    ),
    ("Code is like humor. When you have to explain it, it’s bad.", "Cory House"),
    ("The best way to predict the future is to invent it.", "Alan Kay"),
    (
        "Always code as if the guy who ends up maintaining your code will be a violent psychopath who knows where you live.",
        "John Woods",
    ),
    (
        "The function of good software is to make the complex appear to be simple.",
        "Grady Booch",
    ),
    (
        "If debugging is the process of removing bugs, then programming must be the process of putting them in.",
        "Edsger Dijkstra",
    ),
    ("Good code is its own best documentation.", "Steve McConnell"),
    (
        "Measuring programming progress by lines of code is like measuring aircraft building progress by weight.",
        "Bill Gates",
    ),
    ("Java is to JavaScript what car is to carpet.", "Chris Heilmann"),
    ("Before software can be reusable, it first has to be usable.", "Ralph Johnson"),
    (
        "The trouble with programmers is that you can never tell what a programmer is doing until it’s too late.",
        "Seymour Cray",
    ),
    (
        "One of my most productive days was throwing away 1000 lines of code.",
        "Ken Thompson",
    ),
    (
        "The computer was born to solve problems that did not exist before.",
        "Bill Gates",
    ),
    ("Simplicity is the soul of efficiency.", "Austin Freeman"),
    ("It works on my machine.", "Every Developer Ever"),
    (
        "Software is a great combination between artistry and engineering.",
        "Bill Gates",
    ),
    ("Simplicity, carried to an extreme, becomes elegance.", "Jon Franklin"),
    (
        "There are two ways of constructing a software design: One way is to make it so simple that there are obviously no deficiencies, and the other way is to make it so complicated that there are no obvious deficiencies.",
        "C.A.R. Hoare",
    ),
];

/// Fixed, non-empty list of quotes shown when the remote endpoint is unreachable.
#[derive(Debug, Clone, Copy)]
pub struct FallbackCatalog {
    entries: &'static [(&'static str, &'static str)],
}

impl FallbackCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Quote> + '_ {
        self.entries
            .iter()
            .map(|(text, author)| Quote::from_catalog(text, author))
    }

    pub fn contains(&self, quote: &Quote) -> bool {
        self.entries
            .iter()
            .any(|(text, author)| Quote::from_catalog(text, author) == *quote)
    }

    /// Uniformly random entry.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Quote {
        let (text, author) = self.entries[rng.gen_range(0..self.entries.len())];
        Quote::from_catalog(text, author)
    }
}
