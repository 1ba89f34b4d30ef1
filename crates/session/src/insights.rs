//! Insights tab: headline metrics and the data behind each dashboard view.
//!
//! Only the connection count is live; it reads the counter shared with the
//! network and nearby tabs. Everything else is fixed demo data.

use std::fmt;
use std::sync::Arc;

use catalog::{Catalog, ConnectionCounter, Job, Profile};
use tracing::debug;

pub const PROFILE_VIEWS: u32 = 127;
/// Percent
pub const PROFILE_STRENGTH: u8 = 72;
pub const JOB_APPLICATIONS: u32 = 6;

/// Profiles and jobs listed as recommendations
pub const RECOMMENDATIONS: usize = 3;

/// Which dashboard view is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    #[default]
    Connections,
    Activity,
    Jobs,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Connections => "connections",
            Metric::Activity => "activity",
            Metric::Jobs => "jobs",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub connections: u64,
    pub profile_views: u32,
    pub profile_strength: u8,
    pub job_applications: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillShare {
    pub skill: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyActivity {
    pub day: &'static str,
    pub views: u32,
    pub connections: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPoint {
    pub month: &'static str,
    pub connections: u32,
}

/// A labelled count: job match buckets and application statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub label: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentActivity {
    pub description: &'static str,
    pub when: &'static str,
}

pub const SKILLS: [SkillShare; 5] = [
    SkillShare { skill: "React", value: 45 },
    SkillShare { skill: "TypeScript", value: 38 },
    SkillShare { skill: "Node.js", value: 30 },
    SkillShare { skill: "UI/UX", value: 25 },
    SkillShare { skill: "Python", value: 15 },
];

pub const WEEKLY_ACTIVITY: [DailyActivity; 7] = [
    DailyActivity { day: "Mon", views: 12, connections: 2 },
    DailyActivity { day: "Tue", views: 19, connections: 3 },
    DailyActivity { day: "Wed", views: 15, connections: 1 },
    DailyActivity { day: "Thu", views: 25, connections: 4 },
    DailyActivity { day: "Fri", views: 32, connections: 5 },
    DailyActivity { day: "Sat", views: 18, connections: 2 },
    DailyActivity { day: "Sun", views: 6, connections: 0 },
];

pub const NETWORK_GROWTH: [GrowthPoint; 5] = [
    GrowthPoint { month: "Jan", connections: 5 },
    GrowthPoint { month: "Feb", connections: 8 },
    GrowthPoint { month: "Mar", connections: 15 },
    GrowthPoint { month: "Apr", connections: 19 },
    GrowthPoint { month: "May", connections: 24 },
];

pub const JOB_MATCHES: [Tally; 3] = [
    Tally { label: "Perfect Match", count: 3 },
    Tally { label: "Good Match", count: 8 },
    Tally { label: "Partial Match", count: 15 },
];

pub const APPLICATION_STATUS: [Tally; 4] = [
    Tally { label: "Applied", count: 6 },
    Tally { label: "Interview", count: 2 },
    Tally { label: "Offered", count: 1 },
    Tally { label: "Rejected", count: 1 },
];

pub const RECENT_ACTIVITY: [RecentActivity; 4] = [
    RecentActivity {
        description: "You connected with Sarah Johnson",
        when: "2 hours ago",
    },
    RecentActivity {
        description: "You viewed Tech Senior Developer job",
        when: "5 hours ago",
    },
    RecentActivity {
        description: "Your profile strength increased to 72%",
        when: "Yesterday",
    },
    RecentActivity {
        description: "You applied for Frontend Engineer position",
        when: "2 days ago",
    },
];

pub const LATEST_UPDATE: &str =
    "Good news! You've been invited to interview for Frontend Developer at TechCorp.";

/// Data for the selected view
#[derive(Debug, Clone, PartialEq)]
pub enum MetricView<'a> {
    Connections {
        growth: &'static [GrowthPoint],
        skills: &'static [SkillShare],
        recommended: &'a [Profile],
    },
    Activity {
        weekly: &'static [DailyActivity],
        recent: &'static [RecentActivity],
    },
    Jobs {
        matches: &'static [Tally],
        statuses: &'static [Tally],
        latest_update: &'static str,
        recommended: &'a [Job],
    },
}

pub struct InsightsSession {
    catalog: Arc<Catalog>,
    connections: ConnectionCounter,
    selected: Metric,
}

impl InsightsSession {
    pub fn new(catalog: Arc<Catalog>, connections: ConnectionCounter) -> Self {
        Self {
            catalog,
            connections,
            selected: Metric::default(),
        }
    }

    pub fn selected(&self) -> Metric {
        self.selected
    }

    pub fn select(&mut self, metric: Metric) {
        debug!("Insights view: {}", metric);
        self.selected = metric;
    }

    pub fn headline(&self) -> Headline {
        Headline {
            connections: self.connections.get(),
            profile_views: PROFILE_VIEWS,
            profile_strength: PROFILE_STRENGTH,
            job_applications: JOB_APPLICATIONS,
        }
    }

    pub fn view(&self) -> MetricView<'_> {
        match self.selected {
            Metric::Connections => MetricView::Connections {
                growth: &NETWORK_GROWTH,
                skills: &SKILLS,
                recommended: first(self.catalog.profiles()),
            },
            Metric::Activity => MetricView::Activity {
                weekly: &WEEKLY_ACTIVITY,
                recent: &RECENT_ACTIVITY,
            },
            Metric::Jobs => MetricView::Jobs {
                matches: &JOB_MATCHES,
                statuses: &APPLICATION_STATUS,
                latest_update: LATEST_UPDATE,
                recommended: first(self.catalog.jobs()),
            },
        }
    }
}

fn first<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(RECOMMENDATIONS)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_insights() -> (InsightsSession, ConnectionCounter) {
        let counter = ConnectionCounter::new();
        (
            InsightsSession::new(Arc::new(Catalog::seed()), counter.clone()),
            counter,
        )
    }

    #[test]
    fn test_headline_reads_live_counter() {
        let (insights, counter) = seed_insights();
        assert_eq!(insights.headline().connections, 0);
        counter.increment();
        counter.increment();

        let headline = insights.headline();
        assert_eq!(headline.connections, 2);
        assert_eq!(headline.profile_views, 127);
        assert_eq!(headline.profile_strength, 72);
        assert_eq!(headline.job_applications, 6);
    }

    #[test]
    fn test_defaults_to_connections_view() {
        let (insights, _) = seed_insights();
        assert_eq!(insights.selected(), Metric::Connections);
        match insights.view() {
            MetricView::Connections {
                growth,
                skills,
                recommended,
            } => {
                assert_eq!(growth.last().unwrap().connections, 24);
                assert_eq!(skills[0].skill, "React");
                let names: Vec<_> = recommended.iter().map(|p| p.full_name.as_str()).collect();
                assert_eq!(names.len(), 3);
                assert_eq!(names[0], "Sarah Johnson");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_switching_views() {
        let (mut insights, _) = seed_insights();

        insights.select(Metric::Activity);
        assert!(matches!(
            insights.view(),
            MetricView::Activity { weekly, .. } if weekly.len() == 7
        ));

        insights.select(Metric::Jobs);
        match insights.view() {
            MetricView::Jobs {
                statuses,
                recommended,
                ..
            } => {
                assert_eq!(statuses[0], Tally { label: "Applied", count: 6 });
                let ids: Vec<_> = recommended.iter().map(|j| j.id).collect();
                assert_eq!(ids, vec![1, 2, 3]);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_recommendations_clip_to_catalog() {
        let insights = InsightsSession::new(Arc::new(Catalog::new()), ConnectionCounter::new());
        match insights.view() {
            MetricView::Connections { recommended, .. } => assert!(recommended.is_empty()),
            other => panic!("unexpected view {other:?}"),
        }
    }
}
