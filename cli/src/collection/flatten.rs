use super::model::{CollectionNode, FlatRequest};

/// Depth-first, sibling-order-preserving walk of the collection tree.
///
/// Every request gets a path made of its ancestor folder names and its own name, so a request
/// `Login` inside folder `Auth` becomes `/Auth/Login` and a top-level `Ping` becomes `/Ping`.
/// Empty folders contribute nothing. No sorting is applied, so the output follows source order.
pub fn flatten(nodes: &[CollectionNode]) -> Vec<FlatRequest> {
    let mut requests = Vec::new();
    collect_requests(nodes, "", &mut requests);
    requests
}

fn collect_requests(nodes: &[CollectionNode], namespace: &str, requests: &mut Vec<FlatRequest>) {
    for node in nodes {
        match node {
            CollectionNode::Request(item) => {
                let path = format!("{namespace}/{}", item.name);
                log::debug!("Found request '{}' at {path}", item.name);
                requests.push(FlatRequest {
                    path,
                    name: item.name.clone(),
                    template: item.template.clone(),
                });
            }
            CollectionNode::Folder(folder) => {
                let folder_namespace = format!("{namespace}/{}", folder.name);
                if folder.children.is_empty() {
                    log::debug!("Skipping empty folder {folder_namespace}");
                    continue;
                }
                log::debug!("Digging into folder {folder_namespace}");
                collect_requests(&folder.children, &folder_namespace, requests);
            }
        }
    }
}

/// Exact, case-sensitive lookup. With duplicate paths the first one in traversal order wins.
pub fn find_request<'a>(requests: &'a [FlatRequest], path: &str) -> Option<&'a FlatRequest> {
    let mut matches = requests.iter().filter(|r| {
        log::trace!("testing {}", r.path);
        r.path == path
    });

    let first = matches.next()?;
    let others = matches.count();
    if others > 0 {
        log::warn!(
            "{} requests share the path '{path}'; using the first one",
            others + 1
        );
    }
    Some(first)
}

/// Groups requests by parent path, keeping groups in order of first appearance.
pub fn group_by_parent(requests: &[FlatRequest]) -> Vec<(String, Vec<&FlatRequest>)> {
    let mut groups: Vec<(String, Vec<&FlatRequest>)> = Vec::new();
    for request in requests {
        let group = request.group();
        match groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, members)) => members.push(request),
            None => groups.push((group, vec![request])),
        }
    }
    groups
}
