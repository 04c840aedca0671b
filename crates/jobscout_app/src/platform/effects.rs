use std::io;
use std::sync::mpsc;
use std::thread;

use jobscout_client::{ClientEvent, ClientEvents, ClientHandle, ClientSettings, ScrapeResponse};
use jobscout_core::{CompaniesByKeyword, Effect, Job, Msg, SearchResults};
use scout_logging::{scout_info, scout_warn};

use super::app::AppEvent;

pub(crate) struct EffectRunner {
    client: ClientHandle,
    event_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, event_tx: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        scout_info!("Using scraping service at {}", settings.base_url);
        let (client, events) = ClientHandle::spawn(settings)?;
        spawn_event_loop(events, event_tx.clone())?;
        Ok(Self { client, event_tx })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitSearch {
                    request_id,
                    keywords,
                } => {
                    scout_info!(
                        "SubmitSearch request_id={} keywords={:?}",
                        request_id,
                        keywords
                    );
                    if let Err(err) = self.client.submit(request_id, keywords) {
                        // Settle the request so the UI does not stay in Loading.
                        scout_warn!("Request {} not submitted: {}", request_id, err);
                        let _ = self
                            .event_tx
                            .send(AppEvent::Dispatch(Msg::SearchFailed { request_id }));
                    }
                }
                Effect::CancelSearch { request_id } => {
                    scout_info!("CancelSearch request_id={}", request_id);
                    self.client.cancel(request_id);
                }
            }
        }
    }
}

fn spawn_event_loop(events: ClientEvents, event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("jobscout-events".to_string())
        .spawn(move || {
            while let Some(event) = events.recv() {
                let msg = match event {
                    ClientEvent::SearchCompleted { request_id, result } => match result {
                        Ok(response) => Msg::SearchSucceeded {
                            request_id,
                            results: map_response(response),
                        },
                        Err(err) => {
                            scout_warn!("Search {} failed: {}", request_id, err.kind);
                            Msg::SearchFailed { request_id }
                        }
                    },
                };
                if event_tx.send(AppEvent::Dispatch(msg)).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

fn map_response(response: ScrapeResponse) -> SearchResults {
    SearchResults {
        jobs: response.jobs.into_iter().map(map_job).collect(),
        companies_by_keyword: response
            .companies_by_keyword
            .map(|groups| groups.0.into_iter().collect())
            .unwrap_or_else(CompaniesByKeyword::new),
    }
}

fn map_job(job: jobscout_client::Job) -> Job {
    Job {
        title: job.title,
        company: job.company,
        location: job.location,
        salary_range: job.salary_range,
        posted_date: job.posted_date,
        job_url: job.job_url,
        logo_url: job.logo_url,
        keyword: job.keyword,
    }
}
