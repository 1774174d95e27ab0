//! Simulated run that keeps a live report up to date.
//!
//! The run walks a fixed task plan with a handful of agents. After every
//! step the status subsections are rebuilt and swapped into the report by
//! key, the way a long-running host refreshes its report file.

use mdreport::{Result, Row, Section, Table, Tree};

const AGENTS: [&str; 3] = ["planner", "researcher", "writer"];
const PLAN: [(&str, &[&str]); 3] = [
    ("Gather sources", &["search archives", "filter duplicates"]),
    ("Analyse", &["extract claims", "cross-check figures"]),
    ("Write report", &["draft", "review"]),
];

/// State of one simulated run.
pub struct DemoRun {
    budget: u32,
    spent: u32,
    completed: Vec<(String, String)>,
    report: Section,
}

impl DemoRun {
    /// Create a run and its initial report.
    pub fn new(title: &str, budget: u32) -> Result<Self> {
        let mut report = Section::root(title)?;
        report.add_intro_content([format!("Budget: {} steps", budget)])?;

        let mut config = Table::with_columns("Configuration", ["Setting", "Value"])?;
        config.add_row(["agents", AGENTS.len().to_string().as_str()])?;
        config.add_row(["budget", budget.to_string().as_str()])?;
        let mut configuration = Section::new("Configuration", 2)?;
        configuration.add_intro_content([config])?;

        let mut plan = Tree::new("Plan");
        for (phase, tasks) in PLAN {
            plan.add(phase).add_children(tasks.iter().copied());
        }
        let mut tasks = Section::new("Tasks", 2)?;
        tasks.add_intro_content([plan])?;

        report.add_subsections(vec![
            ("config", configuration),
            ("tasks", tasks),
            ("agents", Section::new("Agents", 2)?),
            ("log", Section::new("Log", 2)?),
        ])?;

        Ok(Self {
            budget,
            spent: 0,
            completed: Vec::new(),
            report,
        })
    }

    /// Advance one step. Returns `false` once the plan or the budget is exhausted.
    pub fn step(&mut self) -> Result<bool> {
        let remaining: Vec<&str> = PLAN
            .iter()
            .flat_map(|(_, tasks)| tasks.iter().copied())
            .skip(self.completed.len())
            .collect();
        let Some(task) = remaining.first() else {
            return Ok(false);
        };
        if self.spent >= self.budget {
            return Ok(false);
        }

        let agent = AGENTS[self.completed.len() % AGENTS.len()];
        self.completed.push((agent.to_string(), task.to_string()));
        self.spent += 1;
        log::debug!("Step {}: {} finished {:?}", self.spent, agent, task);

        self.refresh()?;
        Ok(true)
    }

    /// Run until the plan or the budget is exhausted.
    pub fn run(&mut self, max_steps: u32) -> Result<u32> {
        let mut steps = 0;
        while steps < max_steps && self.step()? {
            steps += 1;
        }
        Ok(steps)
    }

    fn refresh(&mut self) -> Result<()> {
        let mut table = Table::with_columns(
            "Agent Status",
            [("Agent", "left"), ("Completed", "right"), ("Last Task", "left")],
        )?;
        for agent in AGENTS {
            let done: Vec<&str> = self
                .completed
                .iter()
                .filter(|(a, _)| a == agent)
                .map(|(_, t)| t.as_str())
                .collect();
            table.add_row(Row::keyed([
                ("Agent", agent.to_string()),
                ("Completed", done.len().to_string()),
                ("Last Task", done.last().copied().unwrap_or("-").to_string()),
            ]))?;
        }
        let mut agents = Section::new("Agents", 2)?;
        agents.add_intro_content([table])?;
        self.report.set_subsection("agents", agents);

        let mut log = Section::new("Log", 2)?;
        log.add_intro_content(
            self.completed
                .iter()
                .enumerate()
                .map(|(i, (agent, task))| format!("{}. {} finished {}", i + 1, agent, task)),
        )?;
        self.report.set_subsection("log", log);

        self.report.set_intro_content([format!(
            "Budget: {} steps, {} used",
            self.budget, self.spent
        )])?;
        Ok(())
    }

    /// The live report.
    pub fn report(&self) -> &Section {
        &self.report
    }
}
