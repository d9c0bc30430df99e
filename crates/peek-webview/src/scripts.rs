//! Scripts injected into the player page.
//!
//! The player view never gets the IPC bridge object; it only receives a
//! tiny listener that reports fullscreen changes, plus the isolation
//! payload evaluated by the host after each load.

/// Reports `fullscreenchange` transitions to the host.
///
/// Installed as an initialization script, so it runs in every frame
/// before page scripts. Only the top frame reports; nested iframes going
/// fullscreen surface as a top-level `fullscreenchange` anyway.
pub const FULLSCREEN_BRIDGE_SCRIPT: &str = r#"
(function() {
    if (window.top !== window) return;
    var post = function(kind) {
        try {
            window.ipc.postMessage(JSON.stringify({ kind: kind, payload: null }));
        } catch (e) {}
    };
    var onChange = function() {
        var active = document.fullscreenElement || document.webkitFullscreenElement;
        post(active ? 'fullscreen-entered' : 'fullscreen-exited');
    };
    document.addEventListener('fullscreenchange', onChange);
    document.addEventListener('webkitfullscreenchange', onChange);
})();
"#;

/// Content isolation payload.
///
/// Finds the largest player-like element, hides everything else, pins the
/// player to the viewport and keeps its media element filling it via a
/// mutation observer. Idempotent: re-running on the same document only
/// re-applies the styles. Scheduling is the host's job, so there is no
/// delay in here.
pub const ISOLATION_SCRIPT: &str = r#"
(function() {
    try {
        var selectors = 'video[src], iframe, #player, #player-container, .player-container, '
            + '#video-player, .video-player, #video, #videoContainer, .txp_player_root';
        var candidates = Array.prototype.slice.call(document.querySelectorAll(selectors));
        var mainPlayer = null;
        var maxArea = 0;
        candidates.forEach(function(el) {
            var rect = el.getBoundingClientRect();
            var area = rect.width * rect.height;
            if (area > maxArea && rect.width > 200) {
                maxArea = area;
                mainPlayer = el;
            }
        });
        if (!mainPlayer) return;

        Array.prototype.slice.call(document.body.children).forEach(function(child) {
            if (child !== mainPlayer && !child.contains(mainPlayer)) {
                child.style.setProperty('display', 'none', 'important');
            }
        });

        document.body.appendChild(mainPlayer);
        document.body.style.setProperty('overflow', 'hidden', 'important');
        document.documentElement.style.setProperty('overflow', 'hidden', 'important');

        Object.assign(mainPlayer.style, {
            position: 'fixed',
            top: '0', left: '0',
            width: '100vw', height: '100vh',
            zIndex: '2147483647',
            border: 'none', margin: '0', padding: '0'
        });

        var innerMedia = mainPlayer.matches('video, iframe')
            ? mainPlayer
            : mainPlayer.querySelector('video, iframe');
        if (!innerMedia) return;

        var styleId = 'quickpeek-player-fill';
        if (!document.getElementById(styleId)) {
            var style = document.createElement('style');
            style.id = styleId;
            style.textContent =
                'video, iframe { width: 100% !important; height: 100% !important; object-fit: cover !important; }';
            document.head.appendChild(style);
        }

        var forceFill = function(media) {
            media.style.setProperty('width', '100%', 'important');
            media.style.setProperty('height', '100%', 'important');
            media.style.setProperty('object-fit', 'cover', 'important');
        };
        forceFill(innerMedia);

        if (mainPlayer.__quickpeekObserver) return;
        var observer = new MutationObserver(function() {
            var current = mainPlayer.querySelector('video, iframe');
            if (current) forceFill(current);
        });
        observer.observe(mainPlayer, {
            attributes: true, childList: true, subtree: true,
            attributeFilter: ['style', 'class']
        });
        mainPlayer.__quickpeekObserver = observer;
    } catch (e) {
        console.error('QuickPeek isolation failed:', e);
    }
})();
"#;
