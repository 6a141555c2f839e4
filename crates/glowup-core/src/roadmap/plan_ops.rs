//! Plan-level operations for the Roadmap.

use jiff::Timestamp;
use log::debug;

use super::{Roadmap, RoadmapState, RoadmapView};
use crate::{
    display::PlanSummaries,
    engine::{reconcile, select_week, RoadmapSummary},
    error::Result,
    models::{RoadmapEvent, RoadmapGraph},
    params::{NewPlan, ShowRoadmap},
};

impl Roadmap {
    /// Stores a plan produced by the plan generator. The new plan becomes the
    /// authoritative one.
    pub async fn import_plan(&self, params: &NewPlan) -> Result<RoadmapGraph> {
        let new_plan = params.clone();

        self.with_database(move |db| db.create_plan(&new_plan))
            .await
    }

    /// Loads the latest plan and evaluates unlocks.
    ///
    /// Any unlock or metadata repair is committed before returning.
    pub async fn load_current(&self) -> Result<Option<(RoadmapGraph, Vec<RoadmapEvent>)>> {
        let policy = self.policy;

        self.with_database(move |db| {
            let Some(mut graph) = db.load_latest()? else {
                return Ok(None);
            };

            let (unlocked, changed) = reconcile(&mut graph, Timestamp::now(), &policy);
            if changed {
                debug!("Persisting reconciled plan {}", graph.plan.id);
                db.save_roadmap(&graph)?;
            }

            let events = unlocked
                .into_iter()
                .map(|week| RoadmapEvent::WeekUnlocked { week })
                .collect();
            Ok(Some((graph, events)))
        })
        .await
    }

    /// Loads the roadmap and derives everything needed to display it.
    ///
    /// A previously selected week is kept if it still exists; otherwise the
    /// current week is selected.
    pub async fn show_roadmap(&self, params: &ShowRoadmap) -> Result<RoadmapState> {
        let Some((graph, events)) = self.load_current().await? else {
            return Ok(RoadmapState::Empty);
        };

        let summary = RoadmapSummary::project(&graph);
        let selected_week = select_week(&graph, params.week);

        Ok(RoadmapState::Ready(RoadmapView {
            graph,
            summary,
            selected_week,
            events,
        }))
    }

    /// Lists all stored plans, newest first.
    pub async fn list_plans(&self) -> Result<PlanSummaries> {
        let plans = self.with_database(|db| db.list_plans()).await?;
        Ok(PlanSummaries(plans))
    }

    /// Deletes every plan. Returns how many were removed.
    pub async fn clear_history(&self) -> Result<usize> {
        self.with_database(|db| db.clear_history()).await
    }
}
